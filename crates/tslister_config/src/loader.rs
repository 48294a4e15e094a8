//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ListerConfig;
use std::path::Path;

/// Name of the configuration file at the project root.
const CONFIG_FILE: &str = "tslister.toml";

/// Loads and validates the `tslister.toml` of a project directory.
///
/// An absent file is not an error; it yields the default configuration.
pub fn load_config(project_dir: &Path) -> Result<ListerConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ListerConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ListerConfig, ConfigError> {
    let config: ListerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configured values are usable.
fn validate_config(config: &ListerConfig) -> Result<(), ConfigError> {
    if config.engine.program.is_empty() {
        return Err(ConfigError::MissingField("engine.program".to_string()));
    }
    if config.engine.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "engine.timeout_secs must be nonzero".to_string(),
        ));
    }
    if config.cache.max_entries == 0 {
        return Err(ConfigError::ValidationError(
            "cache.max_entries must be at least 1".to_string(),
        ));
    }
    Ok(())
}
