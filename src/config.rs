//! Construction options for `HashTable`.

use crate::hash_table::HashTable;

/// Bucket count of a freshly constructed table.
pub const DEFAULT_CAPACITY: usize = 16;

/// Ratio of entries to buckets above which the table doubles.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Smallest accepted load factor: at most 1024 buckets per entry.
pub const MIN_LOAD_FACTOR: f64 = 1.0 / 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("load factor must be finite and at least 1/1024, got {0}")]
    InvalidLoadFactor(f64),
    #[error("initial capacity must be at least one bucket")]
    ZeroCapacity,
}

/// Builder for `HashTable`.
///
/// ```
/// use chained_hashmap::{HashTable, HashTableBuilder};
///
/// let table: HashTable<u32> = HashTableBuilder::new()
///     .load_factor(0.5)
///     .initial_capacity(100)
///     .build()
///     .unwrap();
/// assert_eq!(table.capacity(), 128);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HashTableBuilder {
    load_factor: f64,
    initial_capacity: usize,
}

impl Default for HashTableBuilder {
    fn default() -> Self {
        Self {
            load_factor: DEFAULT_LOAD_FACTOR,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HashTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Growth threshold. Smaller values trade memory for shorter chains.
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Starting bucket count, rounded up to the next power of two.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn build<V>(self) -> Result<HashTable<V>, ConfigError> {
        let load_factor = validate_load_factor(self.load_factor)?;
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let capacity = self.initial_capacity.next_power_of_two();
        Ok(HashTable::from_parts(capacity, load_factor))
    }
}

pub(crate) fn validate_load_factor(load_factor: f64) -> Result<f64, ConfigError> {
    if load_factor.is_finite() && load_factor >= MIN_LOAD_FACTOR {
        Ok(load_factor)
    } else {
        Err(ConfigError::InvalidLoadFactor(load_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the default builder matches `HashTable::new()`.
    #[test]
    fn defaults_match_new() {
        let built: HashTable<i32> = HashTableBuilder::new().build().unwrap();
        let plain: HashTable<i32> = HashTable::new();
        assert_eq!(built.capacity(), plain.capacity());
        assert_eq!(built.load_factor(), plain.load_factor());
        assert_eq!(built.capacity(), DEFAULT_CAPACITY);
        assert_eq!(built.load_factor(), DEFAULT_LOAD_FACTOR);
    }

    /// Invariant: non-positive, NaN and infinite load factors are rejected.
    #[test]
    fn rejects_bad_load_factors() {
        for lf in [0.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match HashTableBuilder::new().load_factor(lf).build::<()>() {
                Err(ConfigError::InvalidLoadFactor(_)) => {}
                other => panic!("load factor {lf} accepted: {:?}", other.map(|t| t.capacity())),
            }
        }
    }

    /// Invariant: a zero initial capacity is rejected; others round up to a power of two.
    #[test]
    fn capacity_rounding() {
        assert_eq!(
            HashTableBuilder::new()
                .initial_capacity(0)
                .build::<()>()
                .err(),
            Some(ConfigError::ZeroCapacity)
        );
        for (asked, got) in [(1, 1), (3, 4), (16, 16), (17, 32)] {
            let t: HashTable<()> = HashTableBuilder::new()
                .initial_capacity(asked)
                .build()
                .unwrap();
            assert_eq!(t.capacity(), got);
        }
    }

    /// Invariant: vanishingly small load factors are rejected up front instead of
    /// demanding an unbounded bucket count on the first insert.
    #[test]
    fn rejects_tiny_load_factors() {
        for lf in [1e-300, f64::MIN_POSITIVE, MIN_LOAD_FACTOR / 2.0] {
            assert_eq!(
                HashTable::<i32>::with_load_factor(lf).err(),
                Some(ConfigError::InvalidLoadFactor(lf))
            );
        }
    }

    /// Invariant: the smallest accepted load factor still grows in one step.
    #[test]
    fn min_load_factor_is_usable() {
        let mut t: HashTable<i32> = HashTable::with_load_factor(MIN_LOAD_FACTOR).unwrap();
        t.set("a", 1);
        assert_eq!(t.capacity(), 1024);
        t.set("b", 2);
        assert_eq!(t.capacity(), 2048);
        assert_eq!(t.get("a"), Some(&1));
        assert_eq!(t.get("b"), Some(&2));
    }

    /// Invariant: load factors above one are allowed and stored as given.
    #[test]
    fn load_factor_above_one() {
        let t: HashTable<()> = HashTableBuilder::new().load_factor(4.0).build().unwrap();
        assert_eq!(t.load_factor(), 4.0);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::InvalidLoadFactor(-1.0).to_string(),
            "load factor must be finite and at least 1/1024, got -1"
        );
        assert_eq!(
            ConfigError::ZeroCapacity.to_string(),
            "initial capacity must be at least one bucket"
        );
    }
}
