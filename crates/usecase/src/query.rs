// crates/usecase/src/query.rs
use daily_avg_domain::{ActiveIndex, Aggregate, ByValue, IndexKind, OrderedIndex};
use daily_avg_shared_kernel::{DomainError, DomainResult};

use crate::dto::{Bucket, Extreme};

/// Answers requests against whichever index is active.
///
/// Absent keys surface as [`DomainError::NotFound`]; queries the index cannot
/// serve surface as [`DomainError::UnsupportedQuery`].
pub struct QueryEngine<'a> {
    index: &'a mut ActiveIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a mut ActiveIndex) -> Self {
        Self { index }
    }

    pub fn kind(&self) -> IndexKind {
        self.index.kind()
    }

    pub fn lookup(&self, key: &str) -> DomainResult<&Aggregate> {
        self.index.lookup(key).ok_or_else(|| not_found(key))
    }

    pub fn edit(&mut self, key: &str, average: f64) -> DomainResult<Aggregate> {
        let edited = self.index.edit(key, average).cloned().ok_or_else(|| not_found(key))?;
        log::debug!("edited '{key}': average {average}, sum {}", edited.sum());
        Ok(edited)
    }

    pub fn delete(&mut self, key: &str) -> DomainResult<Aggregate> {
        let removed = self.index.delete(key).ok_or_else(|| not_found(key))?;
        log::debug!("deleted '{key}'");
        Ok(removed)
    }

    /// 最小平均とその平均を持つ全キー (by-value のみ)
    pub fn min(&self) -> DomainResult<Extreme> {
        match &*self.index {
            ActiveIndex::ByValue(tree) => {
                let average = tree.find_min()?.average();
                Ok(Extreme { average, aggregates: tied_at(tree, average) })
            }
            other => Err(unsupported("min", other.kind())),
        }
    }

    /// 最大平均とその平均を持つ全キー (by-value のみ)
    pub fn max(&self) -> DomainResult<Extreme> {
        match &*self.index {
            ActiveIndex::ByValue(tree) => {
                let average = tree.find_max()?.average();
                Ok(Extreme { average, aggregates: tied_at(tree, average) })
            }
            other => Err(unsupported("max", other.kind())),
        }
    }

    pub fn find_all_equal(&self, average: f64) -> DomainResult<Vec<Aggregate>> {
        let found = match &*self.index {
            ActiveIndex::ByKey(tree) => tree.find_all_equal(average),
            ActiveIndex::ByValue(tree) => tree.find_all_equal(average),
            ActiveIndex::Chained(_) => return Err(unsupported("find", IndexKind::Chained)),
        };
        Ok(found.into_iter().cloned().collect())
    }

    /// Every bucket of a chained index with its chain (chained only).
    pub fn buckets(&self) -> DomainResult<Vec<Bucket>> {
        let ActiveIndex::Chained(table) = &*self.index else {
            return Err(unsupported("buckets", self.index.kind()));
        };
        Ok(table
            .buckets()
            .map(|(bucket, chain)| Bucket { bucket, aggregates: chain.cloned().collect() })
            .collect())
    }

    /// In-order for trees, bucket order for the table.
    pub fn entries(&self) -> Vec<Aggregate> {
        self.index.iter().cloned().collect()
    }
}

fn tied_at(tree: &OrderedIndex<ByValue>, average: f64) -> Vec<Aggregate> {
    tree.find_all_equal(average).into_iter().cloned().collect()
}

fn not_found(key: &str) -> DomainError {
    DomainError::NotFound { key: key.to_string() }
}

const fn unsupported(operation: &'static str, kind: IndexKind) -> DomainError {
    DomainError::UnsupportedQuery { operation, index: kind.as_str() }
}
