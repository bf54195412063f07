//! Content hashing for manifest file records using MD5

use crate::error::ScanError;
use std::fs;
use std::path::Path;

/// 128-bit content digest
pub type ContentHash = [u8; 16];

/// Compute content hash for file bytes
pub fn compute_content_hash(content: &[u8]) -> ContentHash {
    md5::compute(content).0
}

/// Lowercase hex rendering of a content hash, as stored in the manifest
pub fn to_hex(hash: &ContentHash) -> String {
    hex::encode(hash)
}

/// Hashed file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedFile {
    pub hash: ContentHash,
    pub size: u64,
}

/// Read a whole file and hash it
///
/// The entire file is buffered before hashing.
pub fn hash_file(path: &Path) -> Result<HashedFile, ScanError> {
    let content = fs::read(path).map_err(|e| ScanError::io(path, e))?;
    Ok(HashedFile {
        hash: compute_content_hash(&content),
        size: content.len() as u64,
    })
}
