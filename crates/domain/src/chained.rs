// crates/domain/src/chained.rs
//! チェイン法ハッシュ表 (バケット数は 11 で固定)。
use std::iter::FusedIterator;

use daily_avg_shared_kernel::{DomainError, DomainResult};

use crate::{
    Aggregate, InsertOutcome,
    arena::{NodeArena, NodeId},
};

mod hasher;

pub use hasher::{AdditiveHasher, BucketHasher};

/// Fixed number of buckets. The table never rehashes.
pub const BUCKET_COUNT: usize = 11;

const STRUCTURE: &str = "chained index";

#[derive(Debug, Clone)]
struct ChainNode {
    aggregate: Aggregate,
    next: Option<NodeId>,
}

/// Hash table of aggregates with one singly linked chain per bucket.
#[derive(Debug, Clone)]
pub struct ChainedIndex<H = AdditiveHasher> {
    buckets: [Option<NodeId>; BUCKET_COUNT],
    nodes: NodeArena<ChainNode>,
    hasher: H,
}

impl ChainedIndex {
    pub const fn new() -> Self {
        Self::with_hasher(AdditiveHasher)
    }
}

impl Default for ChainedIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: BucketHasher> ChainedIndex<H> {
    pub const fn with_hasher(hasher: H) -> Self {
        Self { buckets: [None; BUCKET_COUNT], nodes: NodeArena::new(), hasher }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Bucket that `key` hashes to.
    pub fn bucket_of(&self, key: &str) -> usize {
        (self.hasher.hash(key) % BUCKET_COUNT as u64) as usize
    }

    /// Fold `value` into the aggregate for `key`; new keys go to the head of
    /// their chain.
    pub fn insert_or_accumulate(&mut self, key: &str, value: f64) -> DomainResult<InsertOutcome> {
        let bucket = self.bucket_of(key);
        if let Some(id) = self.find_in(bucket, key) {
            self.nodes[id].aggregate.accumulate(value);
            return Ok(InsertOutcome::Accumulated);
        }

        self.nodes.try_reserve_one().map_err(allocation_failure)?;
        let aggregate = Aggregate::try_new(key, value).map_err(allocation_failure)?;
        let id = self.nodes.insert(ChainNode { aggregate, next: self.buckets[bucket] });
        self.buckets[bucket] = Some(id);
        Ok(InsertOutcome::Created)
    }

    pub fn lookup(&self, key: &str) -> Option<&Aggregate> {
        let id = self.find_in(self.bucket_of(key), key)?;
        Some(&self.nodes[id].aggregate)
    }

    /// Overwrite the average of `key`; `sum` is recomputed from the count.
    pub fn edit(&mut self, key: &str, average: f64) -> Option<&Aggregate> {
        let id = self.find_in(self.bucket_of(key), key)?;
        let aggregate = &mut self.nodes[id].aggregate;
        aggregate.set_average(average);
        Some(aggregate)
    }

    /// Unlink `key` from its chain, returning its aggregate.
    pub fn delete(&mut self, key: &str) -> Option<Aggregate> {
        let bucket = self.bucket_of(key);
        let mut previous: Option<NodeId> = None;
        let mut cursor = self.buckets[bucket];

        while let Some(id) = cursor {
            let next = self.nodes[id].next;
            if self.nodes[id].aggregate.key() == key {
                match previous {
                    Some(prev) => self.nodes[prev].next = next,
                    None => self.buckets[bucket] = next,
                }
                return Some(self.nodes.remove(id).aggregate);
            }
            previous = Some(id);
            cursor = next;
        }
        None
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.buckets = [None; BUCKET_COUNT];
    }

    /// Bucket 0 through 10, each chain from its head.
    pub fn iter(&self) -> Entries<'_> {
        Entries { buckets: self.buckets(), chain: None, remaining: self.len() }
    }

    /// Per-bucket view: `(bucket index, chain)` for every bucket, empty ones included.
    pub fn buckets(&self) -> Buckets<'_> {
        Buckets { nodes: &self.nodes, heads: self.buckets.iter().enumerate() }
    }

    pub fn chain(&self, bucket: usize) -> Option<Chain<'_>> {
        let head = *self.buckets.get(bucket)?;
        Some(Chain { nodes: &self.nodes, cursor: head })
    }

    /// Every node sits in the bucket its key hashes to, keys are unique per
    /// chain, aggregates are consistent and no live node is unreachable.
    pub fn verify(&self) -> DomainResult<()> {
        let mut reachable = 0_usize;
        for (bucket, chain) in self.buckets() {
            let mut seen: Vec<&str> = Vec::new();
            for aggregate in chain {
                reachable += 1;
                if reachable > self.nodes.len() {
                    return Err(violation(format!("chain {bucket} loops back on itself")));
                }
                let expected = self.bucket_of(aggregate.key());
                if expected != bucket {
                    return Err(violation(format!(
                        "'{}' found in bucket {bucket} but hashes to {expected}",
                        aggregate.key()
                    )));
                }
                if seen.contains(&aggregate.key()) {
                    return Err(violation(format!("duplicate key '{}' in bucket {bucket}", aggregate.key())));
                }
                if !aggregate.is_consistent() {
                    return Err(violation(format!("aggregate '{}' is inconsistent", aggregate.key())));
                }
                seen.push(aggregate.key());
            }
        }
        if reachable != self.nodes.len() {
            return Err(violation(format!(
                "table reaches {reachable} nodes but {} are live",
                self.nodes.len()
            )));
        }
        Ok(())
    }

    fn find_in(&self, bucket: usize, key: &str) -> Option<NodeId> {
        let mut cursor = self.buckets[bucket];
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if node.aggregate.key() == key {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }
}

impl<'a, H: BucketHasher> IntoIterator for &'a ChainedIndex<H> {
    type Item = &'a Aggregate;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One bucket's chain, head first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    nodes: &'a NodeArena<ChainNode>,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Aggregate;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.aggregate)
    }
}

impl FusedIterator for Chain<'_> {}

#[derive(Debug, Clone)]
pub struct Buckets<'a> {
    nodes: &'a NodeArena<ChainNode>,
    heads: std::iter::Enumerate<std::slice::Iter<'a, Option<NodeId>>>,
}

impl<'a> Iterator for Buckets<'a> {
    type Item = (usize, Chain<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let (bucket, head) = self.heads.next()?;
        Some((bucket, Chain { nodes: self.nodes, cursor: *head }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heads.size_hint()
    }
}

impl ExactSizeIterator for Buckets<'_> {}

/// Bucket-major enumeration of every aggregate.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    buckets: Buckets<'a>,
    chain: Option<Chain<'a>>,
    remaining: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Aggregate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(aggregate) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(aggregate);
            }
            let (_, chain) = self.buckets.next()?;
            self.chain = Some(chain);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

fn allocation_failure(source: std::collections::TryReserveError) -> DomainError {
    DomainError::AllocationFailure { structure: STRUCTURE, source }
}

fn violation(reason: String) -> DomainError {
    DomainError::InvariantViolation { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colliding_keys_share_a_bucket() {
        let mut table = ChainedIndex::new();
        table.insert_or_accumulate("2014-02-13", 10.0).unwrap();
        table.insert_or_accumulate("2014-02-22", 30.0).unwrap();

        assert_eq!(table.bucket_of("2014-02-13"), 3);
        assert_eq!(table.bucket_of("2014-02-22"), 3);
        assert!((table.lookup("2014-02-13").unwrap().average() - 10.0).abs() < f64::EPSILON);
        assert!((table.lookup("2014-02-22").unwrap().average() - 30.0).abs() < f64::EPSILON);

        // 新しいノードはチェインの先頭に入る
        let chain: Vec<_> = table.chain(3).unwrap().map(Aggregate::key).collect();
        assert_eq!(chain, ["2014-02-22", "2014-02-13"]);
        table.verify().unwrap();
    }

    #[test]
    fn delete_unlinks_middle_of_chain() {
        let mut table = ChainedIndex::with_hasher(|_: &str| 0_u64);
        for key in ["a", "b", "c"] {
            table.insert_or_accumulate(key, 1.0).unwrap();
        }
        assert_eq!(table.delete("b").unwrap().key(), "b");
        let chain: Vec<_> = table.chain(0).unwrap().map(Aggregate::key).collect();
        assert_eq!(chain, ["c", "a"]);
        assert!(table.delete("b").is_none());
        assert_eq!(table.len(), 2);
        table.verify().unwrap();
    }

    #[test]
    fn delete_head_then_reinsert_reuses_slot() {
        let mut table = ChainedIndex::new();
        table.insert_or_accumulate("x", 2.0).unwrap();
        let removed = table.delete("x").unwrap();
        assert!(table.is_empty());
        table.insert_or_accumulate("x", 2.0).unwrap();
        assert_eq!(table.lookup("x"), Some(&removed));
    }

    #[test]
    fn edit_rewrites_sum() {
        let mut table = ChainedIndex::new();
        table.insert_or_accumulate("k", 1.0).unwrap();
        table.insert_or_accumulate("k", 3.0).unwrap();
        let edited = table.edit("k", 10.0).unwrap();
        assert!((edited.sum() - 20.0).abs() < f64::EPSILON);
        assert!(table.edit("missing", 1.0).is_none());
    }

    #[test]
    fn iteration_is_bucket_major() {
        let mut table = ChainedIndex::new();
        for key in ["2014-02-13", "2014-01-01", "2014-12-31"] {
            table.insert_or_accumulate(key, 1.0).unwrap();
        }
        let buckets: Vec<_> = table.iter().map(|agg| table.bucket_of(agg.key())).collect();
        let mut sorted = buckets.clone();
        sorted.sort_unstable();
        assert_eq!(buckets, sorted);
        assert_eq!(table.iter().len(), 3);
        assert_eq!(table.buckets().len(), BUCKET_COUNT);
        assert!(table.chain(BUCKET_COUNT).is_none());
    }
}
