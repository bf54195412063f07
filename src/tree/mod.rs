//! Asset tree traversal
//!
//! Walks core directories depth-first, hashes file contents and normalizes
//! paths into the forward-slash form used as manifest keys.

pub mod hasher;
pub mod path;
pub mod walker;
