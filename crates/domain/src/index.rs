// crates/domain/src/index.rs
use std::{fmt, str::FromStr};

use daily_avg_shared_kernel::DomainResult;
use serde::{Deserialize, Serialize};

use crate::{
    Aggregate, ChainedIndex, OrderedIndex,
    chained::Entries,
    order::{AggregateOrder, ByKey, ByValue},
    ordered::InOrder,
};

/// Which index a run is built on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexKind {
    #[default]
    ByKey,
    ByValue,
    Chained,
}

impl IndexKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByKey => ByKey::NAME,
            Self::ByValue => ByValue::NAME,
            Self::Chained => "chained",
        }
    }

    /// `true` for the two tree flavours.
    pub const fn is_ordered(self) -> bool {
        !matches!(self, Self::Chained)
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "by-key" | "key" => Ok(Self::ByKey),
            "by-value" | "value" => Ok(Self::ByValue),
            "chained" | "hash" => Ok(Self::Chained),
            other => Err(format!("Unknown index kind: {other}")),
        }
    }
}

/// What an insertion did to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node was linked in.
    Created,
    /// The reading was folded into an existing aggregate.
    Accumulated,
    /// An equal entry already existed and was left untouched.
    Duplicate,
}

/// The index a run works against.
#[derive(Debug, Clone)]
pub enum ActiveIndex {
    ByKey(OrderedIndex<ByKey>),
    ByValue(OrderedIndex<ByValue>),
    Chained(ChainedIndex),
}

impl ActiveIndex {
    pub const fn new(kind: IndexKind) -> Self {
        match kind {
            IndexKind::ByKey => Self::ByKey(OrderedIndex::new()),
            IndexKind::ByValue => Self::ByValue(OrderedIndex::new()),
            IndexKind::Chained => Self::Chained(ChainedIndex::new()),
        }
    }

    pub const fn kind(&self) -> IndexKind {
        match self {
            Self::ByKey(_) => IndexKind::ByKey,
            Self::ByValue(_) => IndexKind::ByValue,
            Self::Chained(_) => IndexKind::Chained,
        }
    }

    pub const fn len(&self) -> usize {
        match self {
            Self::ByKey(tree) => tree.len(),
            Self::ByValue(tree) => tree.len(),
            Self::Chained(table) => table.len(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn insert_or_accumulate(&mut self, key: &str, value: f64) -> DomainResult<InsertOutcome> {
        match self {
            Self::ByKey(tree) => tree.insert_or_accumulate(key, value),
            Self::ByValue(tree) => tree.insert_or_accumulate(key, value),
            Self::Chained(table) => table.insert_or_accumulate(key, value),
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&Aggregate> {
        match self {
            Self::ByKey(tree) => tree.lookup(key),
            Self::ByValue(tree) => tree.lookup(key),
            Self::Chained(table) => table.lookup(key),
        }
    }

    pub fn edit(&mut self, key: &str, average: f64) -> Option<&Aggregate> {
        match self {
            Self::ByKey(tree) => tree.edit(key, average),
            Self::ByValue(tree) => tree.edit(key, average),
            Self::Chained(table) => table.edit(key, average),
        }
    }

    pub fn delete(&mut self, key: &str) -> Option<Aggregate> {
        match self {
            Self::ByKey(tree) => tree.delete(key),
            Self::ByValue(tree) => tree.delete(key),
            Self::Chained(table) => table.delete(key),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Self::ByKey(tree) => tree.clear(),
            Self::ByValue(tree) => tree.clear(),
            Self::Chained(table) => table.clear(),
        }
    }

    /// In-order for trees, bucket order for the table.
    pub fn iter(&self) -> ActiveEntries<'_> {
        match self {
            Self::ByKey(tree) => ActiveEntries::Ordered(tree.iter()),
            Self::ByValue(tree) => ActiveEntries::Ordered(tree.iter()),
            Self::Chained(table) => ActiveEntries::Chained(table.iter()),
        }
    }

    pub fn verify(&self) -> DomainResult<()> {
        match self {
            Self::ByKey(tree) => tree.verify(),
            Self::ByValue(tree) => tree.verify(),
            Self::Chained(table) => table.verify(),
        }
    }
}

impl From<OrderedIndex<ByKey>> for ActiveIndex {
    fn from(tree: OrderedIndex<ByKey>) -> Self {
        Self::ByKey(tree)
    }
}

impl From<OrderedIndex<ByValue>> for ActiveIndex {
    fn from(tree: OrderedIndex<ByValue>) -> Self {
        Self::ByValue(tree)
    }
}

impl From<ChainedIndex> for ActiveIndex {
    fn from(table: ChainedIndex) -> Self {
        Self::Chained(table)
    }
}

/// Iterator returned by [`ActiveIndex::iter`].
#[derive(Debug, Clone)]
pub enum ActiveEntries<'a> {
    Ordered(InOrder<'a>),
    Chained(Entries<'a>),
}

impl<'a> Iterator for ActiveEntries<'a> {
    type Item = &'a Aggregate;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Ordered(walk) => walk.next(),
            Self::Chained(walk) => walk.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Ordered(walk) => walk.size_hint(),
            Self::Chained(walk) => walk.size_hint(),
        }
    }
}

impl ExactSizeIterator for ActiveEntries<'_> {}
