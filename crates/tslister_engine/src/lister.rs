//! The orchestrator composing discovery, assembly, caching, and execution.

use std::path::PathBuf;

use tslister_cache::ScriptCache;
use tslister_common::{ExternalType, Fingerprint};
use tslister_discover::{discover_files, SourceFile};
use tslister_script::ScriptAssembler;

use crate::error::{EngineError, ListError};
use crate::runner::ScriptRunner;

/// Lists the external types of one project.
///
/// One [`list`](TypeLister::list) call is a single linear pass:
/// discover files, load contents, assemble the script, fingerprint it, and
/// answer from the cache when possible — otherwise run the engine, store the
/// result, and decode it. A corrupted cache entry falls through to a fresh
/// run; a failed fresh run fails the call.
pub struct TypeLister<R> {
    project_dir: PathBuf,
    assembler: ScriptAssembler,
    cache: ScriptCache,
    runner: R,
    use_cache: bool,
}

impl<R: ScriptRunner> TypeLister<R> {
    /// Creates a lister for the project rooted at `project_dir`.
    pub fn new(
        project_dir: PathBuf,
        assembler: ScriptAssembler,
        cache: ScriptCache,
        runner: R,
    ) -> Self {
        Self {
            project_dir,
            assembler,
            cache,
            runner,
            use_cache: true,
        }
    }

    /// Disables the cache lookup for this lister.
    ///
    /// Fresh results are still stored, so a later lookup benefits.
    pub fn skip_cache_lookup(mut self) -> Self {
        self.use_cache = false;
        self
    }

    /// Produces the project's type list.
    ///
    /// Returns the full decoded sequence in the engine's own order, or the
    /// first fatal error. Never returns partial results.
    pub fn list(&self) -> Result<Vec<ExternalType>, ListError> {
        let paths = discover_files(&self.project_dir)?;
        let sources = SourceFile::load_all(&paths)?;
        let script = self.assembler.assemble(&sources);
        let fingerprint = Fingerprint::of_script(&script);

        if self.use_cache {
            if let Some(json) = self.cache.lookup(&fingerprint) {
                match decode(&json) {
                    Ok(types) => return Ok(types),
                    Err(e) => {
                        // A corrupt entry must never block forward progress.
                        tracing::debug!(%fingerprint, error = %e, "corrupt cache entry, re-running");
                    }
                }
            }
        }

        let json = self.runner.run(&script)?;
        self.cache.store(&fingerprint, &json);
        let types = decode(&json).map_err(|source| EngineError::OutputInvalid { source })?;
        tracing::debug!(%fingerprint, count = types.len(), "fresh engine run complete");
        Ok(types)
    }
}

fn decode(json: &str) -> Result<Vec<ExternalType>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_non_array() {
        assert!(decode(r#"{"name": "Widget"}"#).is_err());
        assert!(decode("not json at all").is_err());
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }
}
