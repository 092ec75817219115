//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: building the active index from a reading source
//! - [`query`]: lookups, edits, deletes and extreme queries over that index
//! - [`export`]: handing the index contents to a record sink
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod export;
pub mod orchestrator;
pub mod query;

pub use dto::{Bucket, BuildIndexOutput, Extreme};
pub use export::ExportAggregates;
pub use orchestrator::{BuildIndex, fold_readings};
pub use query::QueryEngine;
