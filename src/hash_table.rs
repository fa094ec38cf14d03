//! HashTable: string-keyed separate-chaining table with load-factor growth.

use crate::bucket::{empty_buckets, Bucket};
use crate::config::{validate_load_factor, ConfigError, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::string_hash::bucket_index;
use core::fmt;
use core::ops::Index;

/// A map from `String` keys to values of type `V`.
///
/// Each key lives in the bucket selected by
/// [`bucket_index`](crate::string_hash::bucket_index) for the current
/// capacity. When an insert pushes `len` above `capacity * load_factor`, the
/// bucket array doubles and every entry is re-placed.
///
/// ```
/// use chained_hashmap::HashTable;
///
/// let mut table = HashTable::new();
/// table.set("apple", 1);
/// table.set("banana", 2);
/// assert_eq!(table.get("banana"), Some(&2));
/// assert!(!table.has("durian"));
/// assert!(table.remove("banana"));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    buckets: Vec<Bucket<V>>,
    load_factor: f64,
    len: usize,
}

impl<V> HashTable<V> {
    /// Empty table with 16 buckets and a load factor of 0.75.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Empty table with 16 buckets and the given load factor.
    pub fn with_load_factor(load_factor: f64) -> Result<Self, ConfigError> {
        let load_factor = validate_load_factor(load_factor)?;
        Ok(Self::from_parts(DEFAULT_CAPACITY, load_factor))
    }

    pub(crate) fn from_parts(capacity: usize, load_factor: f64) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            buckets: empty_buckets(capacity),
            load_factor,
            len: 0,
        }
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket(&self, key: &str) -> &Bucket<V> {
        &self.buckets[bucket_index(key, self.capacity())]
    }

    fn bucket_mut(&mut self, key: &str) -> &mut Bucket<V> {
        let idx = bucket_index(key, self.capacity());
        &mut self.buckets[idx]
    }

    fn over_threshold(&self) -> bool {
        self.len as f64 > self.load_factor * self.capacity() as f64
    }

    /// Insert `key -> value`, or overwrite the value of an existing key.
    ///
    /// Returns the previous value when the key was already present. Only a
    /// new key can trigger growth.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let previous = self.place(key.into(), value);
        if previous.is_none() && self.over_threshold() {
            self.grow();
        }
        previous
    }

    /// Shared insertion path for `set` and rehashing. Never resizes.
    fn place(&mut self, key: String, value: V) -> Option<V> {
        let bucket = self.bucket_mut(&key);
        match bucket.position(&key) {
            Some(pos) => Some(bucket.replace(pos, value)),
            None => {
                bucket.push(key, value);
                self.len += 1;
                None
            }
        }
    }

    /// Double the bucket array and re-place every entry.
    ///
    /// Old buckets are drained in index order, each in stored order, and
    /// `len` is rebuilt by `place`. If `load_factor * capacity < 1`, a single
    /// doubling may not be enough, so capacity keeps doubling until the
    /// threshold holds before the one rehash.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let mut new_capacity = match old_capacity.checked_mul(2) {
            Some(c) => c,
            None => panic!("capacity overflow"),
        };
        while self.len as f64 > self.load_factor * new_capacity as f64 {
            new_capacity = match new_capacity.checked_mul(2) {
                Some(c) => c,
                None => panic!("capacity overflow"),
            };
        }

        let old = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        let moved = self.len;
        self.len = 0;
        for bucket in old {
            for entry in bucket {
                let replaced = self.place(entry.key, entry.value);
                debug_assert!(replaced.is_none(), "rehash found a duplicate key");
            }
        }

        debug_assert_eq!(self.len, moved);
        debug_assert!(!self.over_threshold(), "load factor still exceeded after growth");
        log::debug!(
            "hash table grew from {} to {} buckets ({} entries)",
            old_capacity,
            new_capacity,
            self.len
        );
    }

    /// Value stored under `key`, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.bucket(key).get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.bucket_mut(key).get_mut(key)
    }

    /// Whether `key` is present, independent of what value it holds.
    pub fn has(&self, key: &str) -> bool {
        self.bucket(key).contains(key)
    }

    /// Remove `key`, returning whether it was present.
    ///
    /// Capacity is never reduced.
    pub fn remove(&mut self, key: &str) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Remove `key` and hand back the owned key and value.
    pub fn remove_entry(&mut self, key: &str) -> Option<(String, V)> {
        let bucket = self.bucket_mut(key);
        let pos = bucket.position(key)?;
        let entry = bucket.remove(pos);
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    /// Drop every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        let dropped = self.len;
        self.buckets = empty_buckets(self.capacity());
        self.len = 0;
        log::trace!(
            "hash table cleared ({} entries dropped, {} buckets kept)",
            dropped,
            self.capacity()
        );
    }

    /// Keys in bucket order. The order is unspecified and changes on resize.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// Values in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// `(key, value)` pairs in the same order as [`keys`](Self::keys).
    pub fn entries(&self) -> Iter<'_, V> {
        self.iter()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.buckets, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut::new(&mut self.buckets, self.len)
    }

    #[cfg(feature = "stats")]
    pub fn stats(&self) -> crate::stats::ChainStats {
        crate::stats::ChainStats::collect(&self.buckets, self.len)
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Index<&str> for HashTable<V> {
    type Output = V;

    /// Panics if `key` is absent.
    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Some(v) => v,
            None => panic!("key {key:?} not found in HashTable"),
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for HashTable<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for HashTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<V> IntoIterator for HashTable<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets, self.len)
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut HashTable<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
