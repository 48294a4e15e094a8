//! Error types for engine execution and listing.

use std::time::Duration;

use tslister_discover::DiscoverError;

/// Errors from running the external analysis engine.
///
/// Everything here is fatal for the invocation that hit it: once a fresh run
/// is needed, there is no fallback beyond it.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The ephemeral work directory could not be created or populated.
    #[error("failed to prepare work directory: {source}")]
    WorkDir {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The external interpreter could not be launched.
    #[error("analysis engine unavailable ('{program}' could not be started): {source}")]
    Unavailable {
        /// The interpreter program that failed to start.
        program: String,
        /// The underlying spawn error.
        source: std::io::Error,
    },

    /// Waiting on the child process failed.
    #[error("failed waiting for the analysis engine: {source}")]
    Wait {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The engine did not finish within the configured deadline.
    ///
    /// The child process has been killed and reaped before this is returned.
    #[error("analysis engine timed out after {}s", timeout.as_secs())]
    Timeout {
        /// The deadline that was exceeded.
        timeout: Duration,
    },

    /// The engine exited without writing its output file.
    #[error("analysis engine produced no output file ({output})")]
    OutputMissing {
        /// Name of the expected output file.
        output: String,
    },

    /// The engine's output file was not a decodable type list.
    #[error("analysis engine output could not be decoded: {source}")]
    OutputInvalid {
        /// The underlying JSON decode error.
        source: serde_json::Error,
    },
}

/// Errors surfaced by a [`TypeLister`](crate::TypeLister) call.
///
/// A failed call yields no type information at all; callers treat it as
/// "analysis unavailable", never as an empty result. Cache problems never
/// appear here: the cache path recovers locally by design.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// Source discovery or loading failed.
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    /// The fresh engine run failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_in_seconds() {
        let err = EngineError::Timeout {
            timeout: Duration::from_secs(60),
        };
        assert_eq!(err.to_string(), "analysis engine timed out after 60s");
    }

    #[test]
    fn unavailable_display_names_program() {
        let err = EngineError::Unavailable {
            program: "node".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("'node'"));
    }

    #[test]
    fn output_missing_display() {
        let err = EngineError::OutputMissing {
            output: "typeList.json".to_string(),
        };
        assert!(err.to_string().contains("typeList.json"));
    }

    #[test]
    fn list_error_wraps_discover() {
        let inner = DiscoverError::Io {
            path: "Modules/a.ts".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let err = ListError::from(inner);
        assert!(err.to_string().contains("failed to read"));
    }
}
