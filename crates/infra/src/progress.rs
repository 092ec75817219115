// crates/infra/src/progress.rs
use std::io::Write;

use daily_avg_ports::progress::ProgressSink;
use daily_avg_shared_kernel::Result;

/// Progress messages on standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrProgress;

impl ProgressSink for StderrProgress {
    fn on_ingested(&self, readings: usize, skipped: usize) -> Result<()> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "[progress] {readings} readings loaded ({skipped} lines skipped)")?;
        Ok(())
    }

    fn on_indexed(&self, aggregates: usize) -> Result<()> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "[progress] index built: {aggregates} aggregates")?;
        Ok(())
    }
}
