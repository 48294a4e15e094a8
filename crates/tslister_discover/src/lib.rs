//! Source file discovery for tslister.
//!
//! Walks the fixed set of project subdirectories that may contain TypeScript
//! sources, applies the declaration-file filtering rules, and returns a
//! deterministic, lexicographically ordered file list. Discovery never reads
//! file contents; loading happens separately via [`SourceFile`].

#![warn(missing_docs)]

pub mod discovery;
pub mod error;
pub mod source_file;

pub use discovery::discover_files;
pub use error::DiscoverError;
pub use source_file::SourceFile;
