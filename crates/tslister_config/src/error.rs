//! Error type for `tslister.toml` handling.

/// Errors raised while reading or validating a project's `tslister.toml`.
///
/// Configuration problems are always fatal: a half-applied config would run
/// the wrong interpreter or purge the wrong directory.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read tslister.toml: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not well-formed TOML, or a field has the wrong type.
    #[error("tslister.toml is malformed: {0}")]
    ParseError(String),

    /// A field that must carry a value is empty.
    #[error("tslister.toml leaves {0} empty")]
    MissingField(String),

    /// A value is outside its accepted range.
    #[error("bad tslister.toml value: {0}")]
    ValidationError(String),
}
