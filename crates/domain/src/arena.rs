// crates/domain/src/arena.rs
use std::{
    collections::TryReserveError,
    ops::{Index, IndexMut},
};

/// Stable handle to a node slot. Only meaningful for the arena that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<NodeId> },
}

/// Slot storage for index nodes. Freed slots are threaded into a free list
/// and reused before the backing vector grows.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
    live: usize,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new(), free_head: None, live: 0 }
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.live
    }

    /// Guarantee that the next [`NodeArena::insert`] does not allocate.
    pub(crate) fn try_reserve_one(&mut self) -> Result<(), TryReserveError> {
        if self.free_head.is_none() && self.slots.len() == self.slots.capacity() {
            self.slots.try_reserve(1)?;
        }
        Ok(())
    }

    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        self.live += 1;
        if let Some(id) = self.free_head {
            self.free_head = match self.slots[id.0] {
                Slot::Vacant { next_free } => next_free,
                Slot::Occupied(_) => dangling(id),
            };
            self.slots[id.0] = Slot::Occupied(value);
            return id;
        }
        let id = NodeId(self.slots.len());
        self.slots.push(Slot::Occupied(value));
        id
    }

    /// Vacate `id` and hand back its value.
    pub(crate) fn remove(&mut self, id: NodeId) -> T {
        let slot = std::mem::replace(&mut self.slots[id.0], Slot::Vacant { next_free: self.free_head });
        match slot {
            Slot::Occupied(value) => {
                self.free_head = Some(id);
                self.live -= 1;
                value
            }
            Slot::Vacant { .. } => dangling(id),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match &self.slots[id.0] {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => dangling(id),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.0] {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => dangling(id),
        }
    }
}

#[cold]
#[track_caller]
fn dangling(id: NodeId) -> ! {
    panic!("node {} is not live in this arena", id.0)
}
