// crates/domain/src/aggregate.rs
use std::collections::TryReserveError;

use daily_avg_shared_kernel::ReadingCount;
use serde::{Deserialize, Serialize};

/// Relative tolerance used when checking `average == sum / count`.
const AVERAGE_TOLERANCE: f64 = 1e-9;

/// Running total for one key: every reading folded in so far and their mean.
///
/// `count` is never zero for an aggregate held by an index, and `average`
/// always tracks `sum / count` (edits rewrite `sum` so that stays true).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    key: String,
    sum: f64,
    count: ReadingCount,
    average: f64,
}

impl Aggregate {
    /// Aggregate holding a single reading.
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), sum: value, count: ReadingCount::one(), average: value }
    }

    /// Like [`Aggregate::new`] but surfaces allocation failure of the key copy.
    pub(crate) fn try_new(key: &str, value: f64) -> Result<Self, TryReserveError> {
        let mut owned = String::new();
        owned.try_reserve_exact(key.len())?;
        owned.push_str(key);
        Ok(Self { key: owned, sum: value, count: ReadingCount::one(), average: value })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn sum(&self) -> f64 {
        self.sum
    }

    pub const fn count(&self) -> ReadingCount {
        self.count
    }

    pub const fn average(&self) -> f64 {
        self.average
    }

    /// Fold one more reading into the totals.
    pub fn accumulate(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
        self.average = self.sum / self.count.as_f64();
    }

    /// Overwrite the mean, keeping the count. `sum` becomes `average * count`.
    pub fn set_average(&mut self, average: f64) {
        self.average = average;
        self.sum = average * self.count.as_f64();
    }

    /// `count >= 1` and `average` agrees with `sum / count`.
    pub fn is_consistent(&self) -> bool {
        if self.count.is_zero() {
            return false;
        }
        let expected = self.sum / self.count.as_f64();
        if !expected.is_finite() || !self.average.is_finite() {
            return expected.to_bits() == self.average.to_bits();
        }
        (self.average - expected).abs() <= AVERAGE_TOLERANCE * self.average.abs().max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_updates_totals_and_mean() {
        let mut agg = Aggregate::new("2014-02-13", 10.0);
        agg.accumulate(20.0);
        agg.accumulate(30.0);
        assert_eq!(agg.count(), 3);
        assert!((agg.sum() - 60.0).abs() < f64::EPSILON);
        assert!((agg.average() - 20.0).abs() < f64::EPSILON);
        assert!(agg.is_consistent());
    }

    #[test]
    fn set_average_rewrites_sum_from_count() {
        let mut agg = Aggregate::new("k", 1.0);
        agg.accumulate(3.0);
        agg.set_average(5.5);
        assert!((agg.sum() - 11.0).abs() < f64::EPSILON);
        assert_eq!(agg.count(), 2);
        assert!(agg.is_consistent());
    }

    #[test]
    fn count_saturates_so_the_mean_stays_finite() {
        let mut agg = Aggregate { key: "k".into(), sum: 2.0, count: ReadingCount::new(u32::MAX), average: 0.0 };
        agg.accumulate(1.0);
        assert_eq!(agg.count(), u32::MAX);
        assert!(agg.average().is_finite());
    }

    #[test]
    fn try_new_copies_key() {
        let agg = Aggregate::try_new("2014", 4.0).unwrap();
        assert_eq!(agg, Aggregate::new("2014", 4.0));
    }
}
