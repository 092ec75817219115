// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod export;
pub mod persistence;
pub mod progress;
pub mod readings;

pub use export::{RecordFileSink, RecordFormat};
pub use progress::StderrProgress;
pub use readings::JsonLinesSource;
