//! Iterators over `HashTable`.
//!
//! All of them walk the bucket array in index order and each bucket in
//! insertion order. That order is a layout artifact: it changes whenever the
//! table resizes.

use crate::bucket::{Bucket, Entry};
use core::iter::{Flatten, FusedIterator};

/// Iterator over `(&str, &V)` pairs, returned by `HashTable::iter` and
/// `HashTable::entries`.
pub struct Iter<'a, V> {
    it: Flatten<core::slice::Iter<'a, Bucket<V>>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(buckets: &'a [Bucket<V>], len: usize) -> Self {
        Self {
            it: buckets.iter().flatten(),
            remaining: len,
        }
    }
}

impl<'a, V> Clone for Iter<'a, V> {
    fn clone(&self) -> Self {
        Self {
            it: self.it.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e: &'a Entry<V> = self.it.next()?;
        self.remaining -= 1;
        Some((e.key.as_str(), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over `(&str, &mut V)` pairs.
pub struct IterMut<'a, V> {
    it: Flatten<core::slice::IterMut<'a, Bucket<V>>>,
    remaining: usize,
}

impl<'a, V> IterMut<'a, V> {
    pub(crate) fn new(buckets: &'a mut [Bucket<V>], len: usize) -> Self {
        Self {
            it: buckets.iter_mut().flatten(),
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e: &'a mut Entry<V> = self.it.next()?;
        self.remaining -= 1;
        Some((e.key.as_str(), &mut e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// Owning iterator over `(String, V)` pairs.
pub struct IntoIter<V> {
    it: Flatten<std::vec::IntoIter<Bucket<V>>>,
    remaining: usize,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(buckets: Vec<Bucket<V>>, len: usize) -> Self {
        Self {
            it: buckets.into_iter().flatten(),
            remaining: len,
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.it.next()?;
        self.remaining -= 1;
        Some((e.key, e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

/// Iterator over keys.
pub struct Keys<'a, V> {
    pub(crate) inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}
impl<V> FusedIterator for Keys<'_, V> {}

/// Iterator over values.
pub struct Values<'a, V> {
    pub(crate) inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
impl<V> FusedIterator for Values<'_, V> {}

/// Iterator over mutable values.
pub struct ValuesMut<'a, V> {
    pub(crate) inner: IterMut<'a, V>,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}
impl<V> FusedIterator for ValuesMut<'_, V> {}

#[cfg(test)]
mod tests {
    use crate::bucket::empty_buckets;
    use crate::string_hash::bucket_index;
    use crate::HashTable;

    /// Invariant: iteration visits buckets in index order, and each bucket in
    /// insertion order.
    #[test]
    fn walks_buckets_in_index_order() {
        let mut t = HashTable::new();
        let keys: Vec<String> = (0..10).map(|i| format!("k{i}")).collect();
        for (i, k) in keys.iter().enumerate() {
            t.set(k.as_str(), i);
        }

        let mut expected: Vec<(usize, usize, &str)> = keys
            .iter()
            .enumerate()
            .map(|(order, k)| (bucket_index(k, t.capacity()), order, k.as_str()))
            .collect();
        expected.sort();
        let expected: Vec<&str> = expected.into_iter().map(|(_, _, k)| k).collect();

        let seen: Vec<&str> = t.keys().collect();
        assert_eq!(seen, expected);
    }

    /// Invariant: `size_hint` is exact and shrinks as items are consumed.
    #[test]
    fn exact_size() {
        let mut t = HashTable::new();
        for i in 0..5 {
            t.set(format!("k{i}"), i);
        }
        let mut it = t.iter();
        assert_eq!(it.len(), 5);
        it.next();
        assert_eq!(it.len(), 4);
        assert_eq!(t.keys().len(), 5);
        assert_eq!(t.values().len(), 5);
    }

    /// Invariant: iterators over an empty bucket array yield nothing.
    #[test]
    fn empty_yields_nothing() {
        let buckets = empty_buckets::<i32>(4);
        let mut it = super::Iter::new(&buckets, 0);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    /// Invariant: `into_iter` hands back every owned pair exactly once.
    #[test]
    fn into_iter_moves_out() {
        let mut t = HashTable::new();
        for i in 0..20 {
            t.set(format!("k{i}"), vec![i]);
        }
        let mut pairs: Vec<(String, Vec<i32>)> = t.into_iter().collect();
        pairs.sort();
        assert_eq!(pairs.len(), 20);
        assert!(pairs.iter().all(|(k, v)| *k == format!("k{}", v[0])));
    }
}
