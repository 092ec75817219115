#![allow(clippy::multiple_crate_versions)]

pub mod aggregate;
mod arena;
pub mod chained;
pub mod index;
pub mod order;
pub mod ordered;

pub use aggregate::Aggregate;
pub use chained::{AdditiveHasher, BUCKET_COUNT, BucketHasher, ChainedIndex};
pub use index::{ActiveIndex, IndexKind, InsertOutcome};
pub use order::{AggregateOrder, ByKey, ByValue};
pub use ordered::OrderedIndex;
