//! Integration tests for the asset manifest generator

mod determinism;
mod manifest_builder;
mod test_utils;
