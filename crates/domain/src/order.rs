// crates/domain/src/order.rs
//! Orderings an [`OrderedIndex`](crate::OrderedIndex) can be built on.
use std::cmp::Ordering;

use crate::Aggregate;

/// Total order over aggregates used to shape an ordered index.
pub trait AggregateOrder {
    /// Label used in diagnostics and error messages.
    const NAME: &'static str;

    /// `true` when editing an average can move the entry.
    const ORDERS_BY_AVERAGE: bool;

    /// Compare a `(key, average)` probe against a stored aggregate.
    fn compare_parts(key: &str, average: f64, node: &Aggregate) -> Ordering;

    /// Direction to descend when looking for `key` alone, or `None` when the
    /// ordering does not follow keys and a scan is required.
    fn seek(key: &str, node: &Aggregate) -> Option<Ordering>;

    fn compare(a: &Aggregate, b: &Aggregate) -> Ordering {
        Self::compare_parts(a.key(), a.average(), b)
    }
}

/// Lexicographic by key. Keys are unique within the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByKey;

impl AggregateOrder for ByKey {
    const NAME: &'static str = "by-key";
    const ORDERS_BY_AVERAGE: bool = false;

    fn compare_parts(key: &str, _average: f64, node: &Aggregate) -> Ordering {
        key.cmp(node.key())
    }

    fn seek(key: &str, node: &Aggregate) -> Option<Ordering> {
        Some(key.cmp(node.key()))
    }
}

/// Ascending by average, ties broken by key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByValue;

impl AggregateOrder for ByValue {
    const NAME: &'static str = "by-value";
    const ORDERS_BY_AVERAGE: bool = true;

    fn compare_parts(key: &str, average: f64, node: &Aggregate) -> Ordering {
        average.total_cmp(&node.average()).then_with(|| key.cmp(node.key()))
    }

    fn seek(_key: &str, _node: &Aggregate) -> Option<Ordering> {
        None
    }
}
