// crates/usecase/src/orchestrator.rs
use daily_avg_domain::{ActiveIndex, ByKey, ByValue, IndexKind, OrderedIndex};
use daily_avg_ports::{
    progress::ProgressSink,
    readings::{IngestPlan, ReadingSource},
};
use daily_avg_shared_kernel::{ApplicationError, DomainResult, Reading, Result};

use crate::dto::BuildIndexOutput;

/// Collects readings from a source and folds them into a fresh index.
pub struct BuildIndex<'a> {
    source: &'a dyn ReadingSource,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> BuildIndex<'a> {
    pub fn new(source: &'a dyn ReadingSource) -> Self {
        Self { source, progress: None }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn run(&self, plan: &IngestPlan, kind: IndexKind) -> Result<BuildIndexOutput> {
        let batch = self.source.collect(plan).map_err(|e| ApplicationError::IngestFailed {
            reason: format!("could not read {} input(s)", plan.inputs.len()),
            source: Some(Box::new(e)),
        })?;
        log::debug!("collected {} readings ({} skipped)", batch.readings.len(), batch.skipped);
        if let Some(progress) = self.progress {
            progress.on_ingested(batch.readings.len(), batch.skipped)?;
        }

        let index = fold_readings(kind, &batch.readings)?;
        log::info!("built {kind} index with {} aggregates", index.len());
        if let Some(progress) = self.progress {
            progress.on_indexed(index.len())?;
        }

        Ok(BuildIndexOutput { index, readings: batch.readings.len(), skipped: batch.skipped })
    }
}

/// Fold `readings` into an index of the requested kind.
///
/// By-value indexes are staged in a by-key tree first so each reading finds
/// its aggregate by descent, then re-indexed by average.
pub fn fold_readings(kind: IndexKind, readings: &[Reading]) -> DomainResult<ActiveIndex> {
    if kind == IndexKind::ByValue {
        let mut staged = OrderedIndex::<ByKey>::new();
        for reading in readings {
            staged.insert_or_accumulate(&reading.key, reading.value)?;
        }
        return OrderedIndex::<ByValue>::try_from_aggregates(staged.iter().cloned()).map(ActiveIndex::from);
    }

    let mut index = ActiveIndex::new(kind);
    for reading in readings {
        index.insert_or_accumulate(&reading.key, reading.value)?;
    }
    Ok(index)
}
