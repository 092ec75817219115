// crates/usecase/src/export.rs
use daily_avg_domain::ActiveIndex;
use daily_avg_ports::export::{AggregateRecord, RecordSink};
use daily_avg_shared_kernel::{ApplicationError, Result};

use crate::dto::to_record;

/// Writes the index contents, in iteration order, to a record sink.
pub struct ExportAggregates<'a> {
    sink: &'a dyn RecordSink,
}

impl<'a> ExportAggregates<'a> {
    pub fn new(sink: &'a dyn RecordSink) -> Self {
        Self { sink }
    }

    /// Returns the number of rows written.
    pub fn run(&self, index: &ActiveIndex) -> Result<usize> {
        let records: Vec<AggregateRecord> = index.iter().map(to_record).collect();
        self.sink.write_records(&records).map_err(|e| ApplicationError::ExportFailed {
            reason: format!("{} record(s) not written", records.len()),
            source: Some(Box::new(e)),
        })?;
        log::info!("exported {} aggregates", records.len());
        Ok(records.len())
    }
}
