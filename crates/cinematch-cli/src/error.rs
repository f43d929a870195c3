//! Error types for the cinematch CLI.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Input file could not be read
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid JSON of the expected shape
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error on stdin/stdout
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Engine rejected the catalog or configuration
    #[error(transparent)]
    Engine(#[from] cinematch::CineMatchError),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Read { .. } => ExitCode::from(3),
            Self::Json { .. } => ExitCode::from(4),
            Self::Engine(_) => ExitCode::from(5),
            Self::Io(_) | Self::Serialize(_) => ExitCode::from(7),
        }
    }
}
