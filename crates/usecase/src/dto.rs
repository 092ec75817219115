// crates/usecase/src/dto.rs
use daily_avg_domain::{ActiveIndex, Aggregate};
use daily_avg_ports::export::AggregateRecord;
use serde::Serialize;

/// Result of [`BuildIndex::run`](crate::BuildIndex::run).
#[derive(Debug)]
pub struct BuildIndexOutput {
    pub index: ActiveIndex,
    /// Readings folded into the index.
    pub readings: usize,
    /// Malformed input the source dropped.
    pub skipped: usize,
}

/// Extreme average together with every aggregate that has it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub average: f64,
    pub aggregates: Vec<Aggregate>,
}

/// One bucket of a chained index, chain order preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub bucket: usize,
    pub aggregates: Vec<Aggregate>,
}

pub fn to_record(aggregate: &Aggregate) -> AggregateRecord {
    AggregateRecord {
        key: aggregate.key().to_string(),
        average: aggregate.average(),
        sum: aggregate.sum(),
        count: aggregate.count(),
    }
}
