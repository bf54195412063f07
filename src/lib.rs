//! Asset Manifest: build manifests for core asset trees
//!
//! Scans an asset directory whose top-level subdirectories are cores, hashes
//! every file, derives classification tags and produces a JSON manifest for
//! distribution and update tooling.

pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod manifest;
pub mod tree;

pub use error::{ApiError, ScanError};
pub use manifest::{BuildReport, Manifest, ManifestBuilder};
