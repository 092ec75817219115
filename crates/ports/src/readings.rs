// crates/ports/src/readings.rs
use std::path::PathBuf;

use daily_avg_shared_kernel::{Granularity, Reading, Result};
use serde::{Deserialize, Serialize};

/// Input parameters controlling reading ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestPlan {
    /// Input files; `-` stands for standard input.
    pub inputs: Vec<PathBuf>,
    pub granularity: Granularity,
    /// Fail on the first malformed line instead of skipping it.
    pub strict: bool,
}

/// Readings gathered by a source, keys already truncated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingBatch {
    pub readings: Vec<Reading>,
    /// Lines or members dropped as malformed.
    pub skipped: usize,
}

/// Port for collecting keyed readings.
pub trait ReadingSource: Send + Sync {
    fn collect(&self, plan: &IngestPlan) -> Result<ReadingBatch>;
}
