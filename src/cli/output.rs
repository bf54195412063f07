//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, ScanError};

/// Map domain errors to a single line for stderr.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Scan(ScanError::Io { path, source }) => {
            format!("error: cannot read {}: {}", path.display(), source)
        }
        other => format!("error: {}", other),
    }
}
