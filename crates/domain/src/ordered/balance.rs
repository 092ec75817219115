// crates/domain/src/ordered/balance.rs
use super::OrderedIndex;
use crate::arena::NodeId;

impl<O> OrderedIndex<O> {
    pub(super) fn height_of(&self, slot: Option<NodeId>) -> i32 {
        slot.map_or(0, |id| self.nodes[id].height)
    }

    pub(super) fn balance_factor(&self, id: NodeId) -> i32 {
        let node = &self.nodes[id];
        self.height_of(node.left) - self.height_of(node.right)
    }

    fn update_height(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[id].height = height;
    }

    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let Some(pivot) = self.nodes[id].left else {
            return id;
        };
        self.nodes[id].left = self.nodes[pivot].right;
        self.nodes[pivot].right = Some(id);
        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let Some(pivot) = self.nodes[id].right else {
            return id;
        };
        self.nodes[id].right = self.nodes[pivot].left;
        self.nodes[pivot].left = Some(id);
        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    /// Recompute the height of `id` and restore balance, returning the new
    /// subtree root.
    pub(super) fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.update_height(id);
        let balance = self.balance_factor(id);

        if balance > 1 {
            if let Some(left) = self.nodes[id].left {
                if self.balance_factor(left) < 0 {
                    let rotated = self.rotate_left(left);
                    self.nodes[id].left = Some(rotated);
                }
            }
            return self.rotate_right(id);
        }

        if balance < -1 {
            if let Some(right) = self.nodes[id].right {
                if self.balance_factor(right) > 0 {
                    let rotated = self.rotate_right(right);
                    self.nodes[id].right = Some(rotated);
                }
            }
            return self.rotate_left(id);
        }

        id
    }
}
