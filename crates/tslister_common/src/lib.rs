//! Shared foundational types for the tslister type-listing tool.
//!
//! This crate provides the content fingerprint used as the cache key and the
//! decoded type-descriptor model produced by the external analysis engine.

#![warn(missing_docs)]

pub mod hash;
pub mod types;

pub use hash::Fingerprint;
pub use types::{ExternalType, TypeMember};
