//! Manifest builder: discovers cores under the asset root and scans each one

use crate::config::ManifestConfig;
use crate::error::{ApiError, ScanError};
use crate::ignore::{ExclusionRules, MatchMode};
use crate::manifest::tags::Classifier;
use crate::manifest::{FileRecord, FolderRecord, Manifest, DEFAULT_DB_ID};
use crate::tree::hasher;
use crate::tree::path;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Default name of the relocatable tree inside a core
pub const DEFAULT_RELOCATABLE_DIR: &str = "games";

/// A top-level directory of the asset root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Core {
    pub name: String,
    pub path: PathBuf,
}

/// Per-core scan totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreSummary {
    pub name: String,
    pub files: usize,
    pub folders: usize,
    pub bytes: u64,
}

/// Manifest plus the per-core totals gathered while building it
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub manifest: Manifest,
    pub cores: Vec<CoreSummary>,
}

impl BuildReport {
    pub fn total_files(&self) -> usize {
        self.cores.iter().map(|c| c.files).sum()
    }

    pub fn total_folders(&self) -> usize {
        self.cores.iter().map(|c| c.folders).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.cores.iter().map(|c| c.bytes).sum()
    }
}

/// Ensure the base URL ends with a separator
pub fn normalize_base_url(base_url: &str) -> Result<String, ApiError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidArgument(
            "base URL must not be empty".to_string(),
        ));
    }
    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}/", trimmed))
    }
}

/// Builds a [`Manifest`] from an asset directory
pub struct ManifestBuilder {
    asset_dir: PathBuf,
    base_url: String,
    db_id: String,
    rules: ExclusionRules,
    classifier: Classifier,
    walker_config: WalkerConfig,
}

impl ManifestBuilder {
    /// Create a builder with default settings
    ///
    /// The asset directory is canonicalized here, so a missing root fails
    /// before any scanning starts.
    pub fn new(asset_dir: &Path, base_url: &str) -> Result<Self, ApiError> {
        let asset_dir = path::canonicalize_root(asset_dir)?;
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            rules: ExclusionRules::with_defaults(&asset_dir),
            asset_dir,
            base_url,
            db_id: DEFAULT_DB_ID.to_string(),
            classifier: Classifier::new(DEFAULT_RELOCATABLE_DIR),
            walker_config: WalkerConfig::default(),
        })
    }

    /// Create a builder from loaded configuration
    pub fn from_config(
        asset_dir: &Path,
        base_url: &str,
        config: &ManifestConfig,
    ) -> Result<Self, ApiError> {
        let builder = Self::new(asset_dir, base_url)?
            .with_db_id(config.manifest.db_id.clone())
            .with_relocatable_dir(config.manifest.relocatable_dir.clone())
            .with_exclusions(
                config.scan.ignored_directories.clone(),
                config.scan.ignored_files.clone(),
                config.scan.match_mode,
            )
            .with_walker_config(WalkerConfig {
                follow_symlinks: config.scan.follow_symlinks,
                max_depth: config.scan.max_depth,
            });
        Ok(builder)
    }

    pub fn with_db_id(mut self, db_id: impl Into<String>) -> Self {
        self.db_id = db_id.into();
        self
    }

    pub fn with_relocatable_dir(mut self, name: impl Into<String>) -> Self {
        self.classifier = Classifier::new(name);
        self
    }

    pub fn with_exclusions(
        mut self,
        ignored_directories: Vec<String>,
        ignored_files: Vec<String>,
        mode: MatchMode,
    ) -> Self {
        self.rules = ExclusionRules::new(
            self.asset_dir.clone(),
            ignored_directories,
            ignored_files,
            mode,
        );
        self
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the cores under the asset root, sorted by name
    pub fn discover_cores(&self) -> Result<Vec<Core>, ScanError> {
        let read_dir =
            fs::read_dir(&self.asset_dir).map_err(|e| ScanError::io(&self.asset_dir, e))?;

        let mut cores = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ScanError::io(&self.asset_dir, e))?;
            let file_type = entry.file_type().map_err(|e| ScanError::io(entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if self.rules.is_ignored_core(&name) {
                debug!(core = %name, "Skipping ignored directory");
                continue;
            }
            cores.push(Core {
                name,
                path: entry.path(),
            });
        }

        cores.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cores)
    }

    /// Build the manifest stamped with the current time
    pub fn build(&self) -> Result<BuildReport, ApiError> {
        self.build_at(chrono::Utc::now().timestamp())
    }

    /// Build the manifest with an explicit timestamp
    #[instrument(skip(self), fields(asset_dir = %self.asset_dir.display()))]
    pub fn build_at(&self, timestamp: i64) -> Result<BuildReport, ApiError> {
        let start = Instant::now();
        let mut manifest = Manifest::new(self.db_id.clone(), timestamp);
        let mut summaries = Vec::new();

        for core in self.discover_cores()? {
            let summary = self.scan_core(&core, &mut manifest)?;
            info!(
                core = %summary.name,
                files = summary.files,
                folders = summary.folders,
                bytes = summary.bytes,
                "Scanned core"
            );
            summaries.push(summary);
        }

        info!(
            cores = summaries.len(),
            files = manifest.files.len(),
            folders = manifest.folders.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Manifest built"
        );

        Ok(BuildReport {
            manifest,
            cores: summaries,
        })
    }

    fn scan_core(&self, core: &Core, manifest: &mut Manifest) -> Result<CoreSummary, ScanError> {
        let mut summary = CoreSummary {
            name: core.name.clone(),
            ..CoreSummary::default()
        };

        let walker = Walker::with_config(
            core.path.clone(),
            self.rules.clone(),
            self.walker_config.clone(),
        );

        for entry in walker.iter() {
            match entry? {
                Entry::Directory { path } => {
                    let record = self.folder_record(core, &path)?;
                    debug!(core = %core.name, path = %record.path, "Folder");
                    manifest.insert_folder(record);
                    summary.folders += 1;
                }
                Entry::File { path } => {
                    let record = self.file_record(core, &path)?;
                    debug!(core = %core.name, path = %record.path, size = record.size, "File");
                    summary.files += 1;
                    summary.bytes += record.size;
                    manifest.insert_file(record);
                }
            }
        }

        Ok(summary)
    }

    fn folder_record(&self, core: &Core, dir: &Path) -> Result<FolderRecord, ScanError> {
        let relative = path::relative_posix(&core.path, dir)?;
        let classification = self
            .classifier
            .classify_folder(&core.name, &path::segments(&relative));

        Ok(FolderRecord {
            path: relative,
            tags: classification.tags,
            relocatable: classification.relocatable,
        })
    }

    fn file_record(&self, core: &Core, file: &Path) -> Result<FileRecord, ScanError> {
        let relative = path::relative_posix(&core.path, file)?;
        let url_path = path::relative_posix_raw(&self.asset_dir, file)?;
        let hashed = hasher::hash_file(file)?;

        let segments = path::segments(&relative);
        let classification = self.classifier.classify_file(&core.name, &segments);

        Ok(FileRecord {
            hash: hasher::to_hex(&hashed.hash),
            size: hashed.size,
            url: format!("{}{}", self.base_url, url_path),
            tags: classification.tags,
            relocatable: classification.relocatable,
            path: relative,
        })
    }
}
