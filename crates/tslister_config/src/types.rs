//! Configuration types deserialized from `tslister.toml`.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Well-known name of the shared cache subdirectory under the system temp
/// directory, used when no explicit cache dir is configured.
const DEFAULT_CACHE_DIR_NAME: &str = ".tstypecache";

fn default_max_entries() -> usize {
    99
}

fn default_program() -> String {
    "node".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// The top-level configuration parsed from `tslister.toml`.
///
/// Both tables are optional; an absent file deserializes cleanly from the
/// empty string and yields all defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListerConfig {
    /// Result cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// External engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Settings for the fingerprint-keyed result cache.
#[derive(Debug, Deserialize)]
pub struct CacheConfig {
    /// Cache directory. Defaults to `<system temp>/.tstypecache`, shared
    /// across projects and processes.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Maximum entries kept after a store, oldest evicted first.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Entries older than this many seconds are purged on store. Zero means
    /// no age-based expiry; the entry cap alone bounds the cache.
    #[serde(default)]
    pub max_age_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: None,
            max_entries: default_max_entries(),
            max_age_secs: 0,
        }
    }
}

impl CacheConfig {
    /// Resolves the effective cache directory.
    pub fn dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_CACHE_DIR_NAME))
    }

    /// Resolves the age limit as a [`Duration`].
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }
}

/// Settings for the external analysis engine invocation.
#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    /// Interpreter program launched with the assembled script.
    #[serde(default = "default_program")]
    pub program: String,

    /// Hard deadline in seconds for one engine run.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EngineConfig {
    /// Resolves the deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
