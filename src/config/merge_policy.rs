//! Merge rules: built-in defaults applied before any file source.

use crate::ignore::{DEFAULT_IGNORED_DIRECTORIES, DEFAULT_IGNORED_FILES};
use crate::manifest::builder::DEFAULT_RELOCATABLE_DIR;
use crate::manifest::DEFAULT_DB_ID;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("manifest.db_id", DEFAULT_DB_ID)?
        .set_default("manifest.relocatable_dir", DEFAULT_RELOCATABLE_DIR)?
        .set_default("manifest.output", "manifest.json")?
        .set_default("manifest.pretty", false)?
        .set_default("scan.ignored_directories", owned(DEFAULT_IGNORED_DIRECTORIES))?
        .set_default("scan.ignored_files", owned(DEFAULT_IGNORED_FILES))?
        .set_default("scan.match_mode", "substring")?
        .set_default("scan.follow_symlinks", false)
}
