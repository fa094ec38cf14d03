//! Bucket: an insertion-ordered chain of entries sharing one slot.

#[derive(Debug, Clone)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

/// Chain of entries whose keys currently hash to the same slot.
///
/// Keys are unique within a bucket; callers check with `position` before
/// calling `push`.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Bucket<V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    /// Overwrite the value at `pos`, returning the old one.
    pub(crate) fn replace(&mut self, pos: usize, value: V) -> V {
        core::mem::replace(&mut self.entries[pos].value, value)
    }

    pub(crate) fn push(&mut self, key: String, value: V) {
        debug_assert!(!self.contains(&key), "duplicate key in bucket");
        self.entries.push(Entry { key, value });
    }

    /// Remove the entry at `pos`, keeping the remaining entries in order.
    pub(crate) fn remove(&mut self, pos: usize) -> Entry<V> {
        self.entries.remove(pos)
    }

    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Entry<V>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> core::slice::IterMut<'_, Entry<V>> {
        self.entries.iter_mut()
    }
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for Bucket<V> {
    type Item = Entry<V>;
    type IntoIter = std::vec::IntoIter<Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Bucket<V> {
    type Item = &'a Entry<V>;
    type IntoIter = core::slice::Iter<'a, Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Bucket<V> {
    type Item = &'a mut Entry<V>;
    type IntoIter = core::slice::IterMut<'a, Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Fresh array of `capacity` empty buckets.
pub(crate) fn empty_buckets<V>(capacity: usize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Bucket::new);
    buckets
}
