//! Exclusion rules for scanning.
//!
//! Two lists drive exclusion: ignored directory names and ignored file names.
//! Directory names are matched against the whole absolute path of an entry,
//! either as a plain substring (the historical behavior, which also matches
//! names embedded inside longer segments) or as exact path components below
//! the asset root. File names are always compared for equality with the
//! entry's own name.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Built-in ignored directory names.
pub const DEFAULT_IGNORED_DIRECTORIES: &[&str] = &[".git", ".github"];

/// Built-in ignored file names.
pub const DEFAULT_IGNORED_FILES: &[&str] = &[".gitkeep"];

/// How ignored directory names are matched against a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Name occurs anywhere in the absolute path string.
    #[default]
    Substring,
    /// Name equals one of the path components below the asset root.
    Segment,
}

/// Compiled exclusion rules for one asset root.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    root: PathBuf,
    ignored_directories: Vec<String>,
    ignored_files: Vec<String>,
    mode: MatchMode,
}

impl ExclusionRules {
    pub fn new(
        root: impl Into<PathBuf>,
        ignored_directories: Vec<String>,
        ignored_files: Vec<String>,
        mode: MatchMode,
    ) -> Self {
        Self {
            root: root.into(),
            ignored_directories,
            ignored_files,
            mode,
        }
    }

    /// Rules with the built-in lists and substring matching.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(
            root,
            DEFAULT_IGNORED_DIRECTORIES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect(),
            MatchMode::Substring,
        )
    }

    /// True if a top-level directory with this name must not become a core.
    pub fn is_ignored_core(&self, name: &str) -> bool {
        self.ignored_directories.iter().any(|d| d == name)
    }

    /// True if the entry at `path` must be skipped (and, for directories, pruned).
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.matches_ignored_directory(path) || self.matches_ignored_file(path)
    }

    fn matches_ignored_directory(&self, path: &Path) -> bool {
        match self.mode {
            MatchMode::Substring => {
                let path_str = path.to_string_lossy();
                self.ignored_directories
                    .iter()
                    .any(|name| path_str.contains(name.as_str()))
            }
            MatchMode::Segment => {
                let relative = path.strip_prefix(&self.root).unwrap_or(path);
                relative.components().any(|component| match component {
                    Component::Normal(name) => self
                        .ignored_directories
                        .iter()
                        .any(|ignored| name == OsStr::new(ignored)),
                    _ => false,
                })
            }
        }
    }

    fn matches_ignored_file(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self
                .ignored_files
                .iter()
                .any(|ignored| name == OsStr::new(ignored)),
            None => false,
        }
    }
}
