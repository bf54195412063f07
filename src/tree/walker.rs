//! Filesystem walker for traversing core directories

use crate::error::ScanError;
use crate::ignore::ExclusionRules;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A non-directory entry
    File { path: PathBuf },
    /// A directory entry
    Directory { path: PathBuf },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path } | Entry::Directory { path } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory { .. })
    }

    fn from_dir_entry(entry: DirEntry) -> Self {
        if entry.file_type().is_dir() {
            Entry::Directory {
                path: entry.into_path(),
            }
        } else {
            Entry::File {
                path: entry.into_path(),
            }
        }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Depth-first walker over one core's subtree
///
/// Entries are produced lazily in file-name order, with directories after
/// their contents (post-order). Excluded entries are skipped and excluded
/// directories are never descended into. The root itself is not yielded.
pub struct Walker {
    root: PathBuf,
    rules: ExclusionRules,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf, rules: ExclusionRules) -> Self {
        Self {
            root,
            rules,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, rules: ExclusionRules, config: WalkerConfig) -> Self {
        Self {
            root,
            rules,
            config,
        }
    }

    /// Start a lazy traversal
    pub fn iter(&self) -> PostOrder {
        let rules = self.rules.clone();
        let inner = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !rules.is_excluded(entry.path()));

        PostOrder {
            inner: Box::new(inner),
            pending: Vec::new(),
            ready: None,
            done: false,
        }
    }

    /// Walk the subtree and collect all entries
    pub fn walk(&self) -> Result<Vec<Entry>, ScanError> {
        self.iter().collect()
    }
}

/// Adapter turning a pre-order walk into a post-order one
///
/// A directory is held back until the walk leaves it, i.e. until an entry
/// at the same or a shallower depth shows up.
pub struct PostOrder {
    inner: Box<dyn Iterator<Item = walkdir::Result<DirEntry>>>,
    pending: Vec<(usize, Entry)>,
    ready: Option<(usize, Entry)>,
    done: bool,
}

impl Iterator for PostOrder {
    type Item = Result<Entry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((depth, entry)) = self.ready.take() {
                let left_dir = self
                    .pending
                    .last()
                    .is_some_and(|(pending_depth, _)| *pending_depth >= depth);
                if left_dir {
                    if let Some((_, closed)) = self.pending.pop() {
                        self.ready = Some((depth, entry));
                        return Some(Ok(closed));
                    }
                }
                if entry.is_dir() {
                    self.pending.push((depth, entry));
                    continue;
                }
                return Some(Ok(entry));
            }

            if self.done {
                return self.pending.pop().map(|(_, entry)| Ok(entry));
            }

            match self.inner.next() {
                Some(Ok(dir_entry)) => {
                    self.ready = Some((dir_entry.depth(), Entry::from_dir_entry(dir_entry)));
                }
                Some(Err(e)) => {
                    self.done = true;
                    self.pending.clear();
                    return Some(Err(e.into()));
                }
                None => self.done = true,
            }
        }
    }
}
