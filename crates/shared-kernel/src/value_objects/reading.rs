// crates/shared-kernel/src/value_objects/reading.rs
use serde::{Deserialize, Serialize};

/// One keyed measurement, already truncated to the aggregation key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub key: String,
    pub value: f64,
}

impl Reading {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), value }
    }
}

impl<K: Into<String>> From<(K, f64)> for Reading {
    fn from((key, value): (K, f64)) -> Self {
        Self::new(key, value)
    }
}
