// crates/domain/src/ordered.rs
//! AVL 木による集計インデックス。
//!
//! Nodes live in a [`NodeArena`] and link to each other by slot id, so
//! rotations only swap ids. The shape is driven by an [`AggregateOrder`]:
//! [`ByKey`] keeps keys sorted, [`ByValue`] keeps `(average, key)` pairs
//! sorted.
use std::{cmp::Ordering, marker::PhantomData, mem};

use daily_avg_shared_kernel::{DomainError, DomainResult};

use crate::{
    Aggregate, InsertOutcome,
    arena::{NodeArena, NodeId},
    order::{AggregateOrder, ByKey, ByValue},
};

mod balance;
mod iter;
mod verify;

pub use iter::InOrder;

const STRUCTURE: &str = "ordered index";

#[derive(Debug, Clone)]
pub(crate) struct TreeNode {
    aggregate: Aggregate,
    height: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl TreeNode {
    const fn leaf(aggregate: Aggregate) -> Self {
        Self { aggregate, height: 1, left: None, right: None }
    }
}

/// Height-balanced search tree of aggregates.
#[derive(Debug, Clone)]
pub struct OrderedIndex<O = ByKey> {
    nodes: NodeArena<TreeNode>,
    root: Option<NodeId>,
    order: PhantomData<O>,
}

impl<O: AggregateOrder> Default for OrderedIndex<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: AggregateOrder> OrderedIndex<O> {
    pub const fn new() -> Self {
        Self { nodes: NodeArena::new(), root: None, order: PhantomData }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root; 0 for an empty tree.
    pub fn height(&self) -> usize {
        usize::try_from(self.height_of(self.root)).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Fold `value` into the aggregate for `key`, creating it if absent.
    ///
    /// Keys stay unique in both orderings. A by-value tree has to find the key
    /// by scanning, so bulk loads are better staged in a by-key tree and
    /// re-indexed with [`OrderedIndex::try_from_aggregates`].
    ///
    /// On [`DomainError::AllocationFailure`] the tree is left untouched.
    pub fn insert_or_accumulate(&mut self, key: &str, value: f64) -> DomainResult<InsertOutcome> {
        if O::ORDERS_BY_AVERAGE {
            if let Some(average) = self.lookup(key).map(Aggregate::average) {
                // 平均が動くので外して畳み込み、入れ直す
                if let Some(mut aggregate) = self.remove_matching(key, average) {
                    aggregate.accumulate(value);
                    self.insert_root(aggregate, keep_existing);
                    return Ok(InsertOutcome::Accumulated);
                }
            }
        }

        self.nodes.try_reserve_one().map_err(allocation_failure)?;
        let probe = Aggregate::try_new(key, value).map_err(allocation_failure)?;
        Ok(self.insert_root(probe, |existing, _| {
            existing.accumulate(value);
            InsertOutcome::Accumulated
        }))
    }

    /// Insert a fully formed aggregate. An equal entry is left as it is and
    /// reported as [`InsertOutcome::Duplicate`].
    pub fn insert_aggregate(&mut self, aggregate: Aggregate) -> DomainResult<InsertOutcome> {
        self.nodes.try_reserve_one().map_err(allocation_failure)?;
        Ok(self.insert_root(aggregate, keep_existing))
    }

    pub fn lookup(&self, key: &str) -> Option<&Aggregate> {
        self.position(key).map(|id| &self.nodes[id].aggregate)
    }

    /// Overwrite the average of `key`; `sum` is recomputed from the count.
    pub fn edit(&mut self, key: &str, average: f64) -> Option<&Aggregate> {
        let id = self.position(key)?;
        if !O::ORDERS_BY_AVERAGE {
            self.nodes[id].aggregate.set_average(average);
            return Some(&self.nodes[id].aggregate);
        }

        // 位置が変わるので外してから入れ直す (解放したスロットを再利用する)
        let current = self.nodes[id].aggregate.average();
        let mut aggregate = self.remove_matching(key, current)?;
        aggregate.set_average(average);
        self.insert_root(aggregate, keep_existing);
        self.lookup(key)
    }

    /// Remove the aggregate for `key`, returning it.
    pub fn delete(&mut self, key: &str) -> Option<Aggregate> {
        let average = self.lookup(key)?.average();
        self.remove_matching(key, average)
    }

    pub fn first(&self) -> Option<&Aggregate> {
        let mut id = self.root?;
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        Some(&self.nodes[id].aggregate)
    }

    pub fn last(&self) -> Option<&Aggregate> {
        let mut id = self.root?;
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        Some(&self.nodes[id].aggregate)
    }

    /// Every aggregate whose average is exactly `value`, in traversal order.
    ///
    /// Equality is `f64::total_cmp`, the same relation the by-value ordering
    /// uses, so `-0.0` and `0.0` are distinct averages.
    pub fn find_all_equal(&self, value: f64) -> Vec<&Aggregate> {
        self.iter().filter(|aggregate| aggregate.average().total_cmp(&value).is_eq()).collect()
    }

    /// In-order traversal under this tree's ordering.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(&self.nodes, self.root)
    }

    fn position(&self, key: &str) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match O::seek(key, &node.aggregate) {
                Some(Ordering::Less) => cursor = node.left,
                Some(Ordering::Greater) => cursor = node.right,
                Some(Ordering::Equal) => return Some(id),
                None => return self.scan_for(key),
            }
        }
        None
    }

    fn scan_for(&self, key: &str) -> Option<NodeId> {
        let mut walk = self.iter();
        while let Some(id) = walk.next_id() {
            if self.nodes[id].aggregate.key() == key {
                return Some(id);
            }
        }
        None
    }

    /// Caller has already reserved a slot.
    fn insert_root<F>(&mut self, probe: Aggregate, on_match: F) -> InsertOutcome
    where
        F: FnOnce(&mut Aggregate, Aggregate) -> InsertOutcome,
    {
        let (root, outcome) = self.insert_at(self.root, probe, on_match);
        self.root = Some(root);
        outcome
    }

    fn insert_at<F>(&mut self, slot: Option<NodeId>, probe: Aggregate, on_match: F) -> (NodeId, InsertOutcome)
    where
        F: FnOnce(&mut Aggregate, Aggregate) -> InsertOutcome,
    {
        let Some(id) = slot else {
            return (self.nodes.insert(TreeNode::leaf(probe)), InsertOutcome::Created);
        };

        let outcome = match O::compare(&probe, &self.nodes[id].aggregate) {
            Ordering::Equal => return (id, on_match(&mut self.nodes[id].aggregate, probe)),
            Ordering::Less => {
                let left = self.nodes[id].left;
                let (child, outcome) = self.insert_at(left, probe, on_match);
                self.nodes[id].left = Some(child);
                outcome
            }
            Ordering::Greater => {
                let right = self.nodes[id].right;
                let (child, outcome) = self.insert_at(right, probe, on_match);
                self.nodes[id].right = Some(child);
                outcome
            }
        };

        if outcome == InsertOutcome::Created { (self.rebalance(id), outcome) } else { (id, outcome) }
    }

    fn remove_matching(&mut self, key: &str, average: f64) -> Option<Aggregate> {
        let probe = |node: &Aggregate| O::compare_parts(key, average, node);
        let (root, removed) = self.remove_at(self.root, &probe);
        self.root = root;
        removed
    }

    fn remove_at<F>(&mut self, slot: Option<NodeId>, probe: &F) -> (Option<NodeId>, Option<Aggregate>)
    where
        F: Fn(&Aggregate) -> Ordering,
    {
        let Some(id) = slot else {
            return (None, None);
        };

        let removed = match probe(&self.nodes[id].aggregate) {
            Ordering::Equal => return self.unlink(id),
            Ordering::Less => {
                let left = self.nodes[id].left;
                let (child, removed) = self.remove_at(left, probe);
                self.nodes[id].left = child;
                removed
            }
            Ordering::Greater => {
                let right = self.nodes[id].right;
                let (child, removed) = self.remove_at(right, probe);
                self.nodes[id].right = child;
                removed
            }
        };

        if removed.is_some() { (Some(self.rebalance(id)), removed) } else { (Some(id), None) }
    }

    /// Detach the node at `id`, returning the new subtree root and its aggregate.
    fn unlink(&mut self, id: NodeId) -> (Option<NodeId>, Option<Aggregate>) {
        match (self.nodes[id].left, self.nodes[id].right) {
            (Some(_), Some(right)) => {
                // 後続ノードの集計値を昇格させる
                let (rest, successor) = self.take_min(right);
                self.nodes[id].right = rest;
                let removed = mem::replace(&mut self.nodes[id].aggregate, successor);
                (Some(self.rebalance(id)), Some(removed))
            }
            (child, None) | (None, child) => {
                let node = self.nodes.remove(id);
                (child, Some(node.aggregate))
            }
        }
    }

    fn take_min(&mut self, id: NodeId) -> (Option<NodeId>, Aggregate) {
        match self.nodes[id].left {
            Some(left) => {
                let (rest, min) = self.take_min(left);
                self.nodes[id].left = rest;
                (Some(self.rebalance(id)), min)
            }
            None => {
                let node = self.nodes.remove(id);
                (node.right, node.aggregate)
            }
        }
    }
}

impl OrderedIndex<ByValue> {
    /// Lowest-average aggregate (smallest key among ties).
    pub fn find_min(&self) -> DomainResult<&Aggregate> {
        self.first().ok_or(DomainError::EmptyStructure { structure: STRUCTURE })
    }

    /// Highest-average aggregate (largest key among ties).
    pub fn find_max(&self) -> DomainResult<&Aggregate> {
        self.last().ok_or(DomainError::EmptyStructure { structure: STRUCTURE })
    }

    /// Remove the exact `(average, key)` pair.
    pub fn delete_entry(&mut self, average: f64, key: &str) -> Option<Aggregate> {
        self.remove_matching(key, average)
    }

    /// Re-index finished aggregates by value.
    pub fn try_from_aggregates<I>(aggregates: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = Aggregate>,
    {
        let mut index = Self::new();
        for aggregate in aggregates {
            index.insert_aggregate(aggregate)?;
        }
        Ok(index)
    }
}

impl<'a, O: AggregateOrder> IntoIterator for &'a OrderedIndex<O> {
    type Item = &'a Aggregate;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn keep_existing(_existing: &mut Aggregate, _probe: Aggregate) -> InsertOutcome {
    InsertOutcome::Duplicate
}

fn allocation_failure(source: std::collections::TryReserveError) -> DomainError {
    DomainError::AllocationFailure { structure: STRUCTURE, source }
}
