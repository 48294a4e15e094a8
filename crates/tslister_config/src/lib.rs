//! Project configuration for tslister.
//!
//! Loads the optional `tslister.toml` at a project root. Every setting has a
//! default matching the stock toolchain behavior (shared temp cache, `node`
//! interpreter, 60 second deadline), so projects without a config file need
//! nothing.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{CacheConfig, EngineConfig, ListerConfig};
