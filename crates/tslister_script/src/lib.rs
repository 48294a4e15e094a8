//! Script assembly for tslister.
//!
//! Builds the single self-contained Node.js script that the external engine
//! executes: platform shim, engine bootstrap, analysis driver, one source
//! registration statement per discovered file, and a trailer that serializes
//! the parse result to [`OUTPUT_FILE`]. Assembly is pure text manipulation;
//! byte-identical inputs always yield byte-identical script text, which is
//! what makes fingerprint-based memoization sound.

#![warn(missing_docs)]

pub mod assembler;

pub use assembler::{EngineScripts, ScriptAssembler, OUTPUT_FILE};
