// src/version.rs
//! Version string shown by `--version` and the table header.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
