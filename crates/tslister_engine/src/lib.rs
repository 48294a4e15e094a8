//! External engine execution and the type-listing orchestrator.
//!
//! The analysis engine is an opaque executable: it receives the assembled
//! script, runs it, and leaves a JSON result file behind. This crate keeps
//! that contract behind the [`ScriptRunner`] trait, implements it with a
//! one-shot `node` invocation in an ephemeral work directory, and composes
//! discovery, assembly, caching, and execution into [`TypeLister`].

#![warn(missing_docs)]

pub mod error;
pub mod lister;
pub mod runner;

pub use error::{EngineError, ListError};
pub use lister::TypeLister;
pub use runner::{NodeRunner, RunnerConfig, ScriptRunner};
