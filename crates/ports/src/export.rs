// crates/ports/src/export.rs
use daily_avg_shared_kernel::{ReadingCount, Result};
use serde::{Deserialize, Serialize};

/// DTO for one exported aggregate row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub key: String,
    pub average: f64,
    pub sum: f64,
    pub count: ReadingCount,
}

/// Port for persisting aggregate rows.
pub trait RecordSink: Send + Sync {
    fn write_records(&self, records: &[AggregateRecord]) -> Result<()>;
}
