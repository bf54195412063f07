//! CLI route: run context. Applies CLI overrides to configuration, builds the
//! manifest and writes it.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, ManifestConfig};
use crate::error::ApiError;
use crate::manifest::{BuildReport, ManifestBuilder};
use std::path::{Path, PathBuf};
use tracing::info;

/// Apply command-line flags on top of loaded configuration.
/// Precedence: CLI flags override config files, which override defaults.
pub fn apply_cli_overrides(config: &mut ManifestConfig, cli: &Cli) {
    if let Some(ref output) = cli.output {
        config.manifest.output = output.clone();
    }
    if cli.pretty {
        config.manifest.pretty = true;
    }
    if let Some(ref db_id) = cli.db_id {
        config.manifest.db_id = db_id.clone();
    }

    let logging = &mut config.logging;
    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }
}

/// Result of one run
#[derive(Debug)]
pub struct RunOutcome {
    pub report: BuildReport,
    pub output: PathBuf,
}

/// Runtime context for CLI execution: the effective configuration.
pub struct RunContext {
    config: ManifestConfig,
}

impl RunContext {
    /// Load configuration (global file plus optional explicit file).
    pub fn new(config_path: Option<&Path>) -> Result<Self, ApiError> {
        Self::with_config(ConfigLoader::load(config_path)?)
    }

    /// Use an already-loaded configuration. Fails if it does not validate.
    pub fn with_config(config: ManifestConfig) -> Result<Self, ApiError> {
        config.ensure_valid()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Build the manifest for `asset_dir` and write it to the configured output.
    ///
    /// The manifest is written only after the whole tree has been scanned.
    pub fn execute(&self, asset_dir: &Path, base_url: &str) -> Result<RunOutcome, ApiError> {
        let builder = ManifestBuilder::from_config(asset_dir, base_url, &self.config)?;
        info!(
            asset_dir = %builder.asset_dir().display(),
            base_url = builder.base_url(),
            "Building manifest"
        );

        let report = builder.build()?;

        let output = self.config.manifest.output.clone();
        info!(output = %output.display(), "Writing manifest");
        report.manifest.write_to(&output, self.config.manifest.pretty)?;

        Ok(RunOutcome { report, output })
    }
}
