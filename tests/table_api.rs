use std::collections::HashMap;

use lptable::{unsync::ProbingTable, Table, TableError};
use paste::paste;
use proptest::prelude::*;

macro_rules! generate_table_tests {
    ($name:ident, $capacity:expr, $load_factor:expr) => {
        paste! {
            #[test]
            fn [<test_ $name _round_trip>]() {
                let mut table = ProbingTable::new($capacity, $load_factor);
                for i in 0..200u32 {
                    let key = format!("key-{i}");
                    table.update(key.as_str(), i);
                    assert_eq!(table.find(&key), Some(&i));
                }
                assert_eq!(table.size(), 200);
                for i in 0..200u32 {
                    assert_eq!(table.find(&format!("key-{i}")), Some(&i));
                }
                assert!(table.size() <= table.growth_threshold());
            }

            #[test]
            fn [<test_ $name _remove>]() {
                let mut table = ProbingTable::new($capacity, $load_factor);
                for i in 0..100u32 {
                    table.update(format!("key-{i}"), i);
                }
                for i in (0..100u32).filter(|i| i % 3 == 0) {
                    let key = format!("key-{i}");
                    assert!(table.remove(&key));
                    assert_eq!(table.find(&key), None);
                    assert!(!table.remove(&key));
                }
                for i in 0..100u32 {
                    let expected = if i % 3 == 0 { None } else { Some(&i) };
                    assert_eq!(table.find(&format!("key-{i}")), expected);
                }
                assert_eq!(table.size(), 66);
            }
        }
    };
}

generate_table_tests!(tiny, 1, 0.5);
generate_table_tests!(small_dense, 4, 1.0);
generate_table_tests!(default_like, 16, 0.75);
generate_table_tests!(odd_sparse, 7, 0.25);

#[derive(Debug, Clone)]
enum TableOp {
    Update(u8, u32),
    Remove(u8),
}

fn table_ops_strategy() -> impl Strategy<Value = Vec<TableOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0u8..48, any::<u32>()).prop_map(|(k, v)| TableOp::Update(k, v)),
            1 => (0u8..48).prop_map(TableOp::Remove),
        ],
        0..600,
    )
}

fn key(k: u8) -> String {
    format!("k{k}")
}

proptest! {
    #[test]
    fn prop_matches_hash_map(
        capacity in 1usize..=16,
        load_factor in (1u32..=20).prop_map(|n| n as f64 / 20.0),
        compaction in proptest::option::of((1u32..=10).prop_map(|n| n as f64 / 10.0)),
        ops in table_ops_strategy(),
    ) {
        let builder = ProbingTable::builder()
            .initial_capacity(capacity)
            .max_load_factor(load_factor);
        let builder = match compaction {
            Some(ratio) => builder.tombstone_compaction(ratio),
            None => builder,
        };
        let mut table = builder.build();
        let mut model = HashMap::new();

        for op in ops {
            match op {
                TableOp::Update(k, v) => {
                    table.update(key(k), v);
                    model.insert(key(k), v);
                }
                TableOp::Remove(k) => {
                    prop_assert_eq!(table.remove(&key(k)), model.remove(&key(k)).is_some());
                }
            }
            prop_assert_eq!(table.size(), model.len());
            prop_assert_eq!(table.is_empty(), model.is_empty());
            prop_assert!(table.size() <= table.growth_threshold());
        }

        for k in 0..48 {
            prop_assert_eq!(table.find(&key(k)), model.get(&key(k)));
        }

        let stats = table.stats();
        prop_assert!(stats.size() + stats.tombstones() <= stats.capacity());
        prop_assert_eq!(stats.capacity() % capacity, 0);
        prop_assert!((stats.capacity() / capacity).is_power_of_two());
    }

    #[test]
    fn prop_clone_is_independent(ops in table_ops_strategy()) {
        let mut table = ProbingTable::new(4, 0.75);
        let mut model = HashMap::new();
        for op in &ops {
            if let TableOp::Update(k, v) = op {
                table.update(key(*k), *v);
                model.insert(key(*k), *v);
            }
        }

        let snapshot = table.clone();
        for op in ops {
            match op {
                TableOp::Update(k, v) => table.update(key(k), v.wrapping_add(1)),
                TableOp::Remove(k) => {
                    table.remove(&key(k));
                }
            }
        }

        prop_assert_eq!(snapshot.size(), model.len());
        for k in 0..48 {
            prop_assert_eq!(snapshot.find(&key(k)), model.get(&key(k)));
        }
    }
}
