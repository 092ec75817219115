// crates/domain/src/ordered/iter.rs
use std::iter::FusedIterator;

use super::TreeNode;
use crate::{
    Aggregate,
    arena::{NodeArena, NodeId},
};

/// Lazy in-order walk over an [`OrderedIndex`](super::OrderedIndex).
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    nodes: &'a NodeArena<TreeNode>,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(nodes: &'a NodeArena<TreeNode>, root: Option<NodeId>) -> Self {
        Self { nodes, stack: Vec::new(), cursor: root, remaining: nodes.len() }
    }

    pub(super) fn next_id(&mut self) -> Option<NodeId> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.nodes[id].left;
        }
        let id = self.stack.pop()?;
        self.cursor = self.nodes[id].right;
        self.remaining = self.remaining.saturating_sub(1);
        Some(id)
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Aggregate;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.next_id().map(|id| &nodes[id].aggregate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

impl FusedIterator for InOrder<'_> {}
