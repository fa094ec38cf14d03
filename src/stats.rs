//! Chain-length statistics, compiled with the `stats` feature.

use crate::bucket::Bucket;

/// Snapshot of how entries are spread over buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStats {
    /// Number of entries in the table
    pub len: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Entries per bucket (len / capacity)
    pub load: f64,
    /// Buckets holding no entries
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
}

impl ChainStats {
    pub(crate) fn collect<V>(buckets: &[Bucket<V>], len: usize) -> Self {
        let capacity = buckets.len();
        Self {
            len,
            capacity,
            load: if capacity == 0 {
                0.0
            } else {
                len as f64 / capacity as f64
            },
            empty_buckets: buckets.iter().filter(|b| b.is_empty()).count(),
            longest_chain: buckets.iter().map(Bucket::len).max().unwrap_or(0),
        }
    }

    pub fn print(&self) {
        println!("=== Hash Table Chain Statistics ===");
        println!(
            "Population: {} entries in {} buckets ({:.2} per bucket)",
            self.len, self.capacity, self.load
        );
        println!(
            "Empty buckets: {}/{}",
            self.empty_buckets, self.capacity
        );
        println!("Longest chain: {}", self.longest_chain);
    }
}
