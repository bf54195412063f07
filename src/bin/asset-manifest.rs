//! asset-manifest CLI Binary
//!
//! Scans an asset directory and writes the JSON build manifest.

use asset_manifest::cli::{apply_cli_overrides, format_build_summary, map_error, Cli, RunContext};
use asset_manifest::config::ConfigLoader;
use asset_manifest::logging::init_logging;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let mut config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };
    apply_cli_overrides(&mut config, &cli);

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let context = match RunContext::with_config(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.asset_dir, &cli.base_url) {
        Ok(outcome) => {
            info!("Manifest generation completed");
            if !cli.quiet {
                println!("{}", format_build_summary(&outcome.report, &outcome.output));
            }
        }
        Err(e) => {
            error!("Manifest generation failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
