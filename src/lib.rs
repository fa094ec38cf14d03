//! chained-hashmap: a string-keyed hash table using separate chaining and
//! load-factor driven growth.
//!
//! Internal Design:
//!
//! Summary
//! - `HashTable<V>` owns a `Vec` of buckets. Each bucket is an
//!   insertion-ordered chain of `(String, V)` entries.
//! - A key's bucket is `polynomial_hash(key) % capacity`, recomputed on
//!   every operation from the current capacity. Indices are never cached.
//! - Capacity is a power of two, 16 by default, and only grows.
//!
//! Layers
//! - `string_hash`: the polynomial hash `acc = (31 * acc + c) mod (10^9 + 7)`
//!   over Unicode scalar values, and the reduction to a bucket index.
//! - `bucket`: `Entry`/`Bucket`, the chain with position-based access.
//! - `hash_table`: the map itself; growth, removal, clearing, iteration.
//! - `config`: defaults, the `HashTableBuilder` and `ConfigError`.
//! - `iter`: flattened bucket-order iterators.
//!
//! Growth
//! - After inserting a new key, if `len > load_factor * capacity`, the
//!   bucket array is replaced by one twice as large and every entry is
//!   re-placed through the same routine `set` uses, draining old buckets in
//!   index order. `len` is rebuilt by that routine, not copied.
//! - Re-placement never resizes, so growth cannot recurse. For
//!   `load_factor * capacity >= 1`, one doubling restores the threshold; for
//!   smaller products capacity doubles as many times as needed before the
//!   single rehash.
//! - Overwriting an existing key never grows; removal never shrinks.
//!
//! Absent keys
//! - `get` returns `Option<&V>` and `has` scans the bucket directly, so a
//!   stored value can never be mistaken for absence.
//!
//! Iteration order
//! - `keys`, `values`, `entries` and friends walk buckets in index order and
//!   each chain in insertion order. The order is unspecified across resizes;
//!   treat the results as sets.
//!
//! Notes and non-goals
//! - Single-threaded: mutation requires `&mut self`; no internal locking.
//! - Keys are `String` only. Hashing is fixed, not keyed and not resistant
//!   to hash flooding.
//! - Logging goes through the `log` facade (`debug!` on growth, `trace!` on
//!   clear). The crate never installs a logger.

mod bucket;
mod config;
mod hash_table;
mod hash_table_proptest;
pub mod iter;
#[cfg(feature = "stats")]
pub mod stats;
pub mod string_hash;

// Public surface
pub use config::{
    ConfigError, HashTableBuilder, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, MIN_LOAD_FACTOR,
};
pub use hash_table::HashTable;
