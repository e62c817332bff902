use proptest::prelude::*;
use std::collections::HashMap;
use ugraph::collections::{HashTable, MIN_CAPACITY};

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8, u16),
    Remove(u8),
    Get(u8),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            (any::<u8>(), any::<u16>()).prop_map(|(k, v)| Operation::Insert(k, v)),
            any::<u8>().prop_map(Operation::Remove),
            any::<u8>().prop_map(Operation::Get),
        ],
        1..400,
    )
}

proptest! {
    #[test]
    fn test_hash_table_matches_std_map(ops in operations()) {
        let mut std_map = HashMap::new();
        let mut table = HashTable::new();

        for op in ops {
            match op {
                Operation::Insert(k, v) => {
                    prop_assert_eq!(table.insert(k, v), std_map.insert(k, v), "insert {}", k);
                }
                Operation::Remove(k) => {
                    prop_assert_eq!(table.remove(&k), std_map.remove(&k), "remove {}", k);
                }
                Operation::Get(k) => {
                    prop_assert_eq!(table.get(&k), std_map.get(&k), "get {}", k);
                }
            }
            prop_assert_eq!(table.len(), std_map.len());
            prop_assert!(table.capacity() >= MIN_CAPACITY);
            prop_assert!(table.len() * 10 < table.capacity() * 7 + 10);
        }

        // Final consistency check
        for k in 0..=u8::MAX {
            prop_assert_eq!(table.contains_key(&k), std_map.contains_key(&k));
            prop_assert_eq!(table.get(&k), std_map.get(&k));
        }
    }

    #[test]
    fn test_hash_table_drains_to_minimum(keys in proptest::collection::hash_set(any::<u32>(), 0..300)) {
        let mut table = HashTable::new();
        for &k in &keys {
            table.insert(k, ());
        }
        prop_assert_eq!(table.len(), keys.len());

        for &k in &keys {
            prop_assert_eq!(table.remove(&k), Some(()));
            prop_assert!(!table.contains_key(&k));
        }
        prop_assert!(table.is_empty());
        prop_assert_eq!(table.capacity(), MIN_CAPACITY);
    }
}
