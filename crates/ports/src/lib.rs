//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`readings`]: where measurements come from
//! - [`export`]: where finished aggregates are written
//! - [`progress`]: progress reporting for ingestion and index building
//!
//! The usecase layer only talks to these traits; adapters live in infra.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod export;
pub mod progress;
pub mod readings;
