//! CLI parse: clap types for asset-manifest. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Generate a JSON build manifest for a core asset tree
#[derive(Debug, Parser)]
#[command(name = "asset-manifest", version)]
#[command(about = "Generate a JSON build manifest for a core asset tree")]
pub struct Cli {
    /// Asset directory containing one subdirectory per core
    pub asset_dir: PathBuf,

    /// Base URL prefixed to every file's download URL
    pub base_url: String,

    /// Manifest output path (default: manifest.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write indented JSON
    #[arg(long)]
    pub pretty: bool,

    /// Override the database identifier written to db_id
    #[arg(long)]
    pub db_id: Option<String>,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress the summary and all logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
