//! Polynomial string hash used to place keys into buckets.

/// Multiplier applied to the accumulator before adding each codepoint.
pub const MULTIPLIER: u64 = 31;

/// Prime modulus keeping the accumulator below `10^9 + 7`.
pub const MODULUS: u64 = 1_000_000_007;

/// Hash a key by folding its Unicode scalar values:
/// `acc = (31 * acc + c) mod (10^9 + 7)`, starting from 0.
///
/// The accumulator never exceeds `MODULUS`, so the multiply-add stays far
/// below `u64::MAX` before each reduction.
#[inline]
pub fn polynomial_hash(key: &str) -> u64 {
    key.chars()
        .fold(0u64, |acc, c| (MULTIPLIER * acc + c as u64) % MODULUS)
}

/// Bucket slot for `key` in a table of `capacity` buckets.
///
/// Must be recomputed after every capacity change.
#[inline]
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket_index on an empty bucket array");
    (polynomial_hash(key) % capacity as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the empty key hashes to 0 and lands in bucket 0.
    #[test]
    fn empty_key_is_zero() {
        assert_eq!(polynomial_hash(""), 0);
        assert_eq!(bucket_index("", 16), 0);
    }

    /// Invariant: values match a hand-computed fold.
    #[test]
    fn known_values() {
        // 'a' = 97
        assert_eq!(polynomial_hash("a"), 97);
        // 31 * 97 + 98
        assert_eq!(polynomial_hash("ab"), 3105);
        // 31 * 3105 + 99
        assert_eq!(polynomial_hash("abc"), 96354);
        assert_eq!(bucket_index("abc", 16), 96354 % 16);
    }

    /// Invariant: the accumulator is reduced at every step and never reaches the modulus.
    #[test]
    fn long_keys_stay_reduced() {
        let long = "z".repeat(10_000);
        assert!(polynomial_hash(&long) < MODULUS);

        let wide: String = std::iter::repeat('\u{10FFFF}').take(64).collect();
        assert!(polynomial_hash(&wide) < MODULUS);
    }

    /// Invariant: codepoints, not UTF-8 bytes, feed the hash.
    #[test]
    fn hashes_scalar_values() {
        // 'é' is two bytes in UTF-8 but a single scalar, U+00E9.
        assert_eq!(polynomial_hash("é"), 0xE9);
    }

    /// Invariant: hashing is pure; the same key and capacity always agree.
    #[test]
    fn deterministic_across_calls() {
        for key in ["apple", "banana", "cherry", "", "ключ"] {
            for cap in [1usize, 2, 16, 1024] {
                let first = bucket_index(key, cap);
                assert_eq!(first, bucket_index(key, cap));
                assert!(first < cap);
            }
        }
    }

    /// Invariant: with power-of-two capacities, the index after doubling is either
    /// the old index or the old index plus the old capacity.
    #[test]
    fn doubling_splits_buckets() {
        for i in 0..200 {
            let key = format!("key-{i}");
            let old = bucket_index(&key, 16);
            let new = bucket_index(&key, 32);
            assert!(new == old || new == old + 16);
        }
    }
}
