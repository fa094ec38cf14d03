#![cfg(test)]

// Property tests for HashTable kept inside the crate so they run with the
// unit tests and can reach crate-private modules.

use crate::hash_table::HashTable;
use crate::string_hash::bucket_index;
use crate::HashTableBuilder;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Get(usize),
    Has(String),
    Remove(usize),
    Mutate(usize, i32),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,6}", 1..=40).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let has_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            2 => idx.clone().prop_map(OpI::Get),
            2 => prop_oneof![
                has_pool.prop_map(|s: String| s),
                "[a-z]{0,6}".prop_map(|s| s)
            ]
            .prop_map(OpI::Has),
            2 => idx.clone().prop_map(OpI::Remove),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn check_structure(sut: &HashTable<i32>) -> Result<(), TestCaseError> {
    let cap = sut.capacity();
    prop_assert!(cap.is_power_of_two());
    let mut total = 0usize;
    for (key, _) in sut.iter() {
        total += 1;
        // The key must be reachable through its own bucket.
        prop_assert!(sut.has(key));
        prop_assert!(bucket_index(key, cap) < cap);
    }
    prop_assert_eq!(total, sut.len());
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `get`/`has` parity with the model for present and absent keys.
// - `set` returns the previous value exactly when the model had one.
// - `remove` returns true iff the model held the key.
// - `keys` yields each live key exactly once; key set equals the model's.
// - `len` equals the model's size and the load-factor threshold holds.
// - Capacity never decreases, including across `clear`.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: HashTable<i32> = HashTable::new();
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut last_cap = sut.capacity();

        for op in ops {
            match op {
                OpI::Set(i, v) => {
                    let k = pool[i].clone();
                    let prev = sut.set(k.clone(), v);
                    prop_assert_eq!(prev, model.insert(k, v));
                    prop_assert!(
                        sut.len() as f64 <= sut.load_factor() * sut.capacity() as f64,
                        "threshold violated after insert"
                    );
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Has(s) => {
                    prop_assert_eq!(sut.has(&s), model.contains_key(&s));
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    let before = sut.len();
                    let removed = sut.remove(k);
                    prop_assert_eq!(removed, model.remove(k).is_some());
                    prop_assert_eq!(sut.len(), if removed { before - 1 } else { before });
                    prop_assert!(!sut.has(k));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    if let Some(v) = sut.get_mut(k) {
                        *v = v.wrapping_add(d);
                    }
                    if let Some(v) = model.get_mut(k) {
                        *v = v.wrapping_add(d);
                    }
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), last_cap);
                }
                OpI::Iterate => {
                    let seen: BTreeSet<String> = sut.keys().map(str::to_string).collect();
                    let expected: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(seen, expected);
                    for (k, v) in sut.entries() {
                        prop_assert_eq!(Some(v), model.get(k));
                    }
                }
            }

            prop_assert!(sut.capacity() >= last_cap, "capacity shrank");
            last_cap = sut.capacity();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }

        check_structure(&sut)?;
    }
}

// Property: for any valid load factor, growth keeps every key retrievable and
// restores the threshold after each insert.
proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_any_load_factor(
        lf in 0.01f64..8.0,
        init in 1usize..64,
        n in 0usize..300,
    ) {
        let mut sut: HashTable<usize> = HashTableBuilder::new()
            .load_factor(lf)
            .initial_capacity(init)
            .build()
            .unwrap();
        for i in 0..n {
            prop_assert_eq!(sut.set(format!("key-{i}"), i), None);
            prop_assert!(sut.len() as f64 <= lf * sut.capacity() as f64);
        }
        prop_assert_eq!(sut.len(), n);
        for i in 0..n {
            prop_assert_eq!(sut.get(&format!("key-{i}")), Some(&i));
        }
    }
}
