// crates/ports/src/progress.rs
use daily_avg_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    fn on_ingested(&self, readings: usize, skipped: usize) -> Result<()>;
    fn on_indexed(&self, aggregates: usize) -> Result<()>;
}
