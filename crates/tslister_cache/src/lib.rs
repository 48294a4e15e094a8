//! Fingerprint-keyed result cache for tslister.
//!
//! Memoizes the JSON output of an engine run, keyed by the content
//! fingerprint of the assembled script. Entries are immutable standalone
//! files named `<fingerprint>.json` in one flat directory; there is no index
//! file. Every public operation is fail-safe: the cache is purely an
//! optimization and a broken cache must never break a listing run.

#![warn(missing_docs)]

pub mod cache;
pub mod error;

pub use cache::{ScriptCache, DEFAULT_MAX_ENTRIES};
pub use error::CacheError;
