//! Manifest data model
//!
//! The manifest maps core-relative paths to file and folder entries. Records
//! carry their own path while being built; the path becomes the map key when
//! a record is folded into the manifest.

pub mod builder;
pub mod tags;

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

pub use builder::{BuildReport, Core, CoreSummary, ManifestBuilder};
pub use tags::{Classification, Classifier, Tags};

/// Manifest schema version written to `v`
pub const SCHEMA_VERSION: u32 = 1;

/// Default database identifier
pub const DEFAULT_DB_ID: &str = "agg23_db";

/// Location marker for relocatable entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "pext")]
    Pext,
}

impl Location {
    fn from_flag(relocatable: bool) -> Option<Self> {
        relocatable.then_some(Location::Pext)
    }
}

/// File entry as stored in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub hash: String,
    pub size: u64,
    pub url: String,
    pub tags: Tags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Location>,
}

/// Folder entry as stored in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub tags: Tags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Location>,
}

/// A scanned file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub hash: String,
    pub size: u64,
    pub url: String,
    pub tags: Tags,
    pub relocatable: bool,
}

impl FileRecord {
    pub fn into_entry(self) -> (String, FileEntry) {
        (
            self.path,
            FileEntry {
                hash: self.hash,
                size: self.size,
                url: self.url,
                tags: self.tags,
                path: Location::from_flag(self.relocatable),
            },
        )
    }
}

/// A scanned folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRecord {
    pub path: String,
    pub tags: Tags,
    pub relocatable: bool,
}

impl FolderRecord {
    pub fn into_entry(self) -> (String, FolderEntry) {
        (
            self.path,
            FolderEntry {
                tags: self.tags,
                path: Location::from_flag(self.relocatable),
            },
        )
    }
}

/// The generated manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub v: u32,
    pub db_id: String,
    pub timestamp: i64,
    pub files: BTreeMap<String, FileEntry>,
    pub folders: BTreeMap<String, FolderEntry>,
}

impl Manifest {
    pub fn new(db_id: impl Into<String>, timestamp: i64) -> Self {
        Self {
            v: SCHEMA_VERSION,
            db_id: db_id.into(),
            timestamp,
            files: BTreeMap::new(),
            folders: BTreeMap::new(),
        }
    }

    /// Add a file record. A record with an existing key replaces the old one.
    pub fn insert_file(&mut self, record: FileRecord) {
        let (key, entry) = record.into_entry();
        if self.files.insert(key.clone(), entry).is_some() {
            warn!(path = %key, "Duplicate file key, keeping the later record");
        }
    }

    /// Add a folder record. A record with an existing key replaces the old one.
    pub fn insert_folder(&mut self, record: FolderRecord) {
        let (key, entry) = record.into_entry();
        if self.folders.insert(key.clone(), entry).is_some() {
            warn!(path = %key, "Duplicate folder key, keeping the later record");
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, ApiError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Serialize and write the manifest to `path`
    pub fn write_to(&self, path: &Path, pretty: bool) -> Result<(), ApiError> {
        let json = self.to_json(pretty)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ApiError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        fs::write(path, json).map_err(|e| ApiError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Read a manifest previously written with [`Manifest::write_to`]
    pub fn read_from(path: &Path) -> Result<Self, ApiError> {
        let contents = fs::read_to_string(path).map_err(|e| ApiError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}
