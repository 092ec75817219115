// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of readings folded into one aggregate. Arithmetic saturates at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingCount(u32);

impl ReadingCount {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn one() -> Self {
        Self(1)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn saturating_add(self, rhs: u32) -> Self {
        Self(self.0.saturating_add(rhs))
    }

    #[inline]
    pub const fn saturating_add_count(self, rhs: Self) -> Self {
        self.saturating_add(rhs.0)
    }

    /// Count as a divisor for averaging.
    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for ReadingCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for ReadingCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add_count(rhs)
    }
}

impl Add<u32> for ReadingCount {
    type Output = Self;

    fn add(self, rhs: u32) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for ReadingCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add_count(rhs);
    }
}

impl AddAssign<u32> for ReadingCount {
    fn add_assign(&mut self, rhs: u32) {
        *self = self.saturating_add(rhs);
    }
}

impl From<u32> for ReadingCount {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<ReadingCount> for u32 {
    fn from(value: ReadingCount) -> Self {
        value.0
    }
}

impl PartialEq<u32> for ReadingCount {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl Sum for ReadingCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a ReadingCount> for ReadingCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

mod display {
    use std::fmt;

    use super::ReadingCount;

    impl fmt::Display for ReadingCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
