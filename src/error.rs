//! Error types for the asset manifest generator.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors raised while scanning an asset tree.
///
/// Every variant is fatal: a scan either completes or produces nothing.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        match (err.path().map(|p| p.to_path_buf()), err.into_io_error()) {
            (Some(path), Some(source)) => ScanError::Io { path, source },
            (path, _) => ScanError::Walk(match path {
                Some(path) => format!("filesystem loop at {}", path.display()),
                None => "unknown walk failure".to_string(),
            }),
        }
    }
}

/// Errors surfaced to callers of the library and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to serialize manifest: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Manifest file error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
