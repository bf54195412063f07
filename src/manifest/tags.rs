//! Tag derivation for manifest entries.
//!
//! Tags come from the owning core's name and from the first segment of the
//! entry's location inside the core. A first segment equal to the
//! relocatable-tree name marks the entry as relocatable ("pext").

use serde::{Deserialize, Serialize};

/// Ordered tag set: insertion order is kept, duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.0.contains(&tag) {
            self.0.push(tag);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Tag for a core: its name lower-cased.
pub fn core_tag(core_name: &str) -> String {
    core_name.to_lowercase()
}

/// Result of classifying one location inside a core
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub tags: Tags,
    pub relocatable: bool,
}

/// Rules for deriving tags from core-relative segments
#[derive(Debug, Clone)]
pub struct Classifier {
    relocatable_dir: String,
}

impl Classifier {
    pub fn new(relocatable_dir: impl Into<String>) -> Self {
        Self {
            relocatable_dir: relocatable_dir.into(),
        }
    }

    /// Classify a location given its core-relative segments.
    ///
    /// `tags` is pre-seeded by the caller (files start with the core tag).
    pub fn classify(&self, core_name: &str, segments: &[&str], mut tags: Tags) -> Classification {
        let mut relocatable = false;

        if let Some(first) = segments.first() {
            if *first == self.relocatable_dir {
                relocatable = true;
                if segments.len() > 1 {
                    tags.insert(core_tag(core_name));
                }
            }

            match first.strip_prefix('_') {
                Some(stripped) => tags.insert(stripped),
                None => tags.insert(*first),
            }
        }

        Classification { tags, relocatable }
    }

    /// Classify a directory from its own segments.
    pub fn classify_folder(&self, core_name: &str, segments: &[&str]) -> Classification {
        self.classify(core_name, segments, Tags::new())
    }

    /// Classify a file from its own core-relative segments, file name included.
    pub fn classify_file(&self, core_name: &str, segments: &[&str]) -> Classification {
        let mut tags = Tags::new();
        tags.insert(core_tag(core_name));
        self.classify(core_name, segments, tags)
    }
}
