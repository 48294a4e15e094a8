//! Shared wiring between the CLI commands.

use std::error::Error;

use tslister_cache::ScriptCache;
use tslister_config::ListerConfig;

use crate::GlobalArgs;

/// Resolves the effective configuration.
///
/// A `--config` path wins and must exist; otherwise the project directory's
/// optional `tslister.toml` is consulted.
pub fn resolve_config(
    global: &GlobalArgs,
    project_dir: &std::path::Path,
) -> Result<ListerConfig, Box<dyn Error>> {
    let config = match &global.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            tslister_config::load_config_from_str(&content)?
        }
        None => tslister_config::load_config(project_dir)?,
    };
    Ok(config)
}

/// Opens the result cache described by `config`.
pub fn open_cache(config: &ListerConfig) -> ScriptCache {
    ScriptCache::with_policy(
        &config.cache.dir(),
        config.cache.max_age(),
        config.cache.max_entries,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn explicit_config_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tslister.toml"),
            "[engine]\nprogram = \"from-project\"\n",
        )
        .unwrap();
        let alt = dir.path().join("alt.toml");
        std::fs::write(&alt, "[engine]\nprogram = \"from-flag\"\n").unwrap();

        let global = GlobalArgs {
            quiet: true,
            config: Some(alt),
        };
        let config = resolve_config(&global, dir.path()).unwrap();
        assert_eq!(config.engine.program, "from-flag");
    }

    #[test]
    fn missing_explicit_config_errors() {
        let global = GlobalArgs {
            quiet: true,
            config: Some(PathBuf::from("/no/such/tslister.toml")),
        };
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_config(&global, dir.path()).is_err());
    }

    #[test]
    fn project_config_is_used_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tslister.toml"),
            "[cache]\nmax_entries = 7\n",
        )
        .unwrap();
        let global = GlobalArgs {
            quiet: true,
            config: None,
        };
        let config = resolve_config(&global, dir.path()).unwrap();
        assert_eq!(config.cache.max_entries, 7);
    }
}
