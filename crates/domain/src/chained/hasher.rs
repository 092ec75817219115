// crates/domain/src/chained/hasher.rs

/// Maps a key to a hash value; the table reduces it modulo the bucket count.
pub trait BucketHasher {
    fn hash(&self, key: &str) -> u64;
}

/// Sum of the key's byte values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdditiveHasher;

impl BucketHasher for AdditiveHasher {
    fn hash(&self, key: &str) -> u64 {
        key.bytes().map(u64::from).sum()
    }
}

impl<F> BucketHasher for F
where
    F: Fn(&str) -> u64,
{
    fn hash(&self, key: &str) -> u64 {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_hash_sums_bytes() {
        assert_eq!(AdditiveHasher.hash(""), 0);
        assert_eq!(AdditiveHasher.hash("AB"), 65 + 66);
        assert_eq!(AdditiveHasher.hash("2014-02-13"), 487);
        assert_eq!(AdditiveHasher.hash("2014-02-22"), 487);
    }
}
