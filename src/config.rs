//! Configuration System
//!
//! Layered configuration: built-in defaults, then the per-user global file,
//! then an explicit `--config` file. CLI flags are applied on top by the
//! caller.

use crate::error::ApiError;
use crate::ignore::MatchMode;
use crate::logging::LoggingConfig;
use crate::manifest::builder::DEFAULT_RELOCATABLE_DIR;
use crate::manifest::DEFAULT_DB_ID;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge_policy;
mod sources;

pub use sources::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Manifest identity and output settings
    #[serde(default)]
    pub manifest: ManifestSettings,

    /// Traversal and exclusion settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Manifest identity and output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestSettings {
    /// Value written to `db_id`
    #[serde(default = "default_db_id")]
    pub db_id: String,

    /// First-segment name marking the relocatable tree
    #[serde(default = "default_relocatable_dir")]
    pub relocatable_dir: String,

    /// Where the manifest is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Indent the written JSON
    #[serde(default)]
    pub pretty: bool,
}

fn default_db_id() -> String {
    DEFAULT_DB_ID.to_string()
}

fn default_relocatable_dir() -> String {
    DEFAULT_RELOCATABLE_DIR.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            db_id: default_db_id(),
            relocatable_dir: default_relocatable_dir(),
            output: default_output(),
            pretty: false,
        }
    }
}

/// Traversal and exclusion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_ignored_directories")]
    pub ignored_directories: Vec<String>,

    #[serde(default = "default_ignored_files")]
    pub ignored_files: Vec<String>,

    /// How ignored directory names are matched (substring or segment)
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Whether to follow symbolic links while walking
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Deepest level scanned below each core directory (unset = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_ignored_directories() -> Vec<String> {
    crate::ignore::DEFAULT_IGNORED_DIRECTORIES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ignored_files() -> Vec<String> {
    crate::ignore::DEFAULT_IGNORED_FILES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignored_directories: default_ignored_directories(),
            ignored_files: default_ignored_files(),
            match_mode: MatchMode::default(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Manifest(String),
    Scan(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Manifest(msg) => write!(f, "Manifest: {}", msg),
            ValidationError::Scan(msg) => write!(f, "Scan: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\')
}

impl ScanConfig {
    fn validate(&self, errors: &mut Vec<ValidationError>) {
        for name in &self.ignored_directories {
            if !is_plain_name(name) {
                errors.push(ValidationError::Scan(format!(
                    "Ignored directory '{}' must be a non-empty name without separators",
                    name
                )));
            }
        }
        for name in &self.ignored_files {
            if !is_plain_name(name) {
                errors.push(ValidationError::Scan(format!(
                    "Ignored file '{}' must be a non-empty name without separators",
                    name
                )));
            }
        }
        if self.max_depth == Some(0) {
            errors.push(ValidationError::Scan(
                "max_depth must be at least 1".to_string(),
            ));
        }
    }
}

impl ManifestConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.manifest.db_id.trim().is_empty() {
            errors.push(ValidationError::Manifest("db_id cannot be empty".to_string()));
        }
        if !is_plain_name(&self.manifest.relocatable_dir) {
            errors.push(ValidationError::Manifest(format!(
                "relocatable_dir '{}' must be a single path segment",
                self.manifest.relocatable_dir
            )));
        }
        if self.manifest.output.as_os_str().is_empty() {
            errors.push(ValidationError::Manifest(
                "output path cannot be empty".to_string(),
            ));
        }

        self.scan.validate(&mut errors);

        if let Err(e) = crate::logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = crate::logging::validate_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding all problems into one error
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}

/// Loads [`ManifestConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global file if present, then `explicit` if given
    pub fn load(explicit: Option<&Path>) -> Result<ManifestConfig, ApiError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = sources::add_global(builder)?;
        if let Some(path) = explicit {
            builder = sources::add_explicit(builder, path)?;
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Defaults plus a single file, ignoring the global file
    pub fn load_from_file(path: &Path) -> Result<ManifestConfig, ApiError> {
        let builder = sources::add_explicit(merge_policy::builder_with_defaults()?, path)?;
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Defaults only
    pub fn load_defaults() -> Result<ManifestConfig, ApiError> {
        Ok(merge_policy::builder_with_defaults()?
            .build()?
            .try_deserialize()?)
    }
}
