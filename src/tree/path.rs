//! Path canonicalization and POSIX normalization utilities

use crate::error::ScanError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize the asset root
///
/// Resolves symlinks, `..` and `.` without producing `\\?\` prefixes on
/// Windows. Fails if the path does not exist or is not a directory.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, ScanError> {
    let canonical = dunce::canonicalize(path).map_err(|e| ScanError::io(path, e))?;
    if !canonical.is_dir() {
        return Err(ScanError::NotADirectory(canonical));
    }
    Ok(canonical)
}

/// Express `path` relative to `base` with forward-slash separators
///
/// Segments are normalized to Unicode NFC so the same tree yields the same
/// manifest keys on every host. Returns an empty string when `path == base`.
pub fn relative_posix(base: &Path, path: &Path) -> Result<String, ScanError> {
    let segments: Vec<String> = raw_segments(base, path)?
        .iter()
        .map(|segment| normalize_segment(segment))
        .collect();
    Ok(segments.join("/"))
}

/// Like [`relative_posix`] but keeps every name exactly as stored on disk
///
/// Used for download URLs, which must name the file the server will serve.
pub fn relative_posix_raw(base: &Path, path: &Path) -> Result<String, ScanError> {
    Ok(raw_segments(base, path)?.join("/"))
}

fn raw_segments(base: &Path, path: &Path) -> Result<Vec<String>, ScanError> {
    let relative = path.strip_prefix(base).map_err(|_| {
        ScanError::InvalidPath(format!(
            "{} is not under {}",
            path.display(),
            base.display()
        ))
    })?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
            Component::CurDir => {}
            other => {
                return Err(ScanError::InvalidPath(format!(
                    "unexpected component {:?} in {}",
                    other,
                    path.display()
                )))
            }
        }
    }
    Ok(segments)
}

/// Normalize a single path segment to NFC
pub fn normalize_segment(segment: &str) -> String {
    segment.nfc().collect()
}

/// Split a POSIX relative path into its segments, ignoring empty ones
pub fn segments(posix: &str) -> Vec<&str> {
    posix.split('/').filter(|s| !s.is_empty()).collect()
}
