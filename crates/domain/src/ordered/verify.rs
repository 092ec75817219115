// crates/domain/src/ordered/verify.rs
use std::cmp::Ordering;

use daily_avg_shared_kernel::{DomainError, DomainResult};

use super::OrderedIndex;
use crate::{arena::NodeId, order::AggregateOrder};

impl<O: AggregateOrder> OrderedIndex<O> {
    /// Check every structural invariant: stored heights, balance factors,
    /// strict ordering, aggregate consistency and that every live node is
    /// reachable from the root.
    pub fn verify(&self) -> DomainResult<()> {
        let (_, reachable) = self.verify_subtree(self.root)?;
        if reachable != self.nodes.len() {
            return Err(violation(format!(
                "{} tree reaches {reachable} nodes but {} are live",
                O::NAME,
                self.nodes.len()
            )));
        }

        let mut walk = self.iter();
        if let Some(mut previous) = walk.next() {
            for current in walk {
                if O::compare(previous, current) != Ordering::Less {
                    return Err(violation(format!(
                        "{} order broken between '{}' and '{}'",
                        O::NAME,
                        previous.key(),
                        current.key()
                    )));
                }
                previous = current;
            }
        }
        Ok(())
    }

    /// Returns `(height, node count)` of the subtree.
    fn verify_subtree(&self, slot: Option<NodeId>) -> DomainResult<(i32, usize)> {
        let Some(id) = slot else {
            return Ok((0, 0));
        };
        let node = &self.nodes[id];
        let (left_height, left_count) = self.verify_subtree(node.left)?;
        let (right_height, right_count) = self.verify_subtree(node.right)?;

        let height = 1 + left_height.max(right_height);
        if node.height != height {
            return Err(violation(format!(
                "stored height {} of '{}' should be {height}",
                node.height,
                node.aggregate.key()
            )));
        }
        if (left_height - right_height).abs() > 1 {
            return Err(violation(format!(
                "'{}' is out of balance ({left_height} vs {right_height})",
                node.aggregate.key()
            )));
        }
        if !node.aggregate.is_consistent() {
            return Err(violation(format!("aggregate '{}' is inconsistent", node.aggregate.key())));
        }
        Ok((height, left_count + right_count + 1))
    }
}

fn violation(reason: String) -> DomainError {
    DomainError::InvariantViolation { reason }
}
