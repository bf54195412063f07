//! Config file sources: the per-user global file and an explicit `--config` file.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path to the global config file, e.g. `~/.config/asset-manifest/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "asset-manifest").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global config file to the builder if it exists.
pub fn add_global(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.is_file() => {
            debug!(config_path = %path.display(), "Loading global configuration");
            Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(false)))
        }
        _ => Ok(builder),
    }
}

/// Add an explicitly requested config file. A missing file is an error.
pub fn add_explicit(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    debug!(config_path = %path.display(), "Loading configuration file");
    Ok(builder.add_source(
        File::from(path.to_path_buf())
            .format(FileFormat::Toml)
            .required(true),
    ))
}
