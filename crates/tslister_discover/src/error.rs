//! Error types for source discovery and loading.

use std::path::PathBuf;

/// Errors that can occur while enumerating or reading project sources.
///
/// Unlike the cache subsystem, discovery failures are fatal: a directory we
/// cannot enumerate or a candidate file we cannot read means the type list
/// would be incomplete, and partial results are never returned.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    /// A directory could not be enumerated.
    #[error("failed to enumerate {path}: {source}")]
    Walk {
        /// The search root that was being walked.
        path: PathBuf,
        /// The underlying walk error.
        source: walkdir::Error,
    },

    /// A discovered file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = DiscoverError::Io {
            path: PathBuf::from("Modules/Widget.ts"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("Widget.ts"));
    }
}
