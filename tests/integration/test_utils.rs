//! Shared helpers for building asset trees on disk

use std::fs;
use std::path::Path;

/// Write `contents` at `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Create `root/relative` and any missing parents.
pub fn make_dir(root: &Path, relative: &str) {
    fs::create_dir_all(root.join(relative)).unwrap();
}

/// Lowercase hex MD5 of `contents`.
pub fn md5_hex(contents: &[u8]) -> String {
    format!("{:x}", md5::compute(contents))
}

/// Tags of an entry as plain strings.
pub fn tag_list(tags: &asset_manifest::manifest::Tags) -> Vec<&str> {
    tags.as_slice().iter().map(String::as_str).collect()
}
