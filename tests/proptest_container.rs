use floatkv::{Config, FloatKeyContainer, InsertOutcome, MemoryStore, OverflowPolicy};
use proptest::prelude::*;

type Table = FloatKeyContainer<i32, u16, 16, 100>;

fn policy() -> impl Strategy<Value = OverflowPolicy> {
    prop_oneof![
        Just(OverflowPolicy::Reject),
        Just(OverflowPolicy::EvictHighest),
        Just(OverflowPolicy::EvictLowest),
    ]
}

fn filled(pairs: &[(f64, u16)], policy: OverflowPolicy) -> Table {
    let mut table = Table::with_config(Config::builder().overflow_policy(policy).build());
    for &(key, value) in pairs {
        let _ = table.insert(key, value);
    }
    table
}

// Property 1: keys stay sorted and the count stays bounded after every insert
proptest! {
    #[test]
    fn prop_sorted_and_bounded(
        pairs in prop::collection::vec((-500.0f64..500.0, any::<u16>()), 0..64),
        policy in policy()
    ) {
        let mut table = Table::with_config(Config::builder().overflow_policy(policy).build());

        for (key, value) in pairs {
            let before = table.len();
            let outcome = table.insert(key, value);

            prop_assert!(table.len() <= table.capacity());
            prop_assert!(
                table.keys().windows(2).all(|w| w[0] <= w[1]),
                "keys out of order: {:?}", table.keys()
            );

            match outcome {
                Ok(InsertOutcome::Inserted { index }) => {
                    prop_assert_eq!(table.len(), before + 1);
                    prop_assert_eq!(table.entry(index), Some((Table::convert(key), value)));
                }
                Ok(InsertOutcome::Evicted { index, .. }) => {
                    prop_assert_eq!(table.len(), before);
                    prop_assert_eq!(table.entry(index), Some((Table::convert(key), value)));
                }
                Ok(InsertOutcome::Discarded) | Err(_) => {
                    prop_assert_eq!(table.len(), before);
                }
            }
        }
    }
}

// Property 2: find_index returns a stored key at minimal distance, lowest index on ties
proptest! {
    #[test]
    fn prop_nearest_is_optimal(
        pairs in prop::collection::vec((-500.0f64..500.0, any::<u16>()), 1..16),
        probe in -800.0f64..800.0
    ) {
        let table = filled(&pairs, OverflowPolicy::Reject);
        let target = Table::convert(probe);

        let index = table.find_index(probe).unwrap();
        let best = table.keys().iter().map(|k| k.abs_diff(target)).min().unwrap();
        let first_best = table.keys().iter().position(|k| k.abs_diff(target) == best).unwrap();

        prop_assert_eq!(index, first_best);
        prop_assert_eq!(table.get(probe).unwrap(), table.values()[index]);
    }
}

// Property 3: save then load reproduces the full state
proptest! {
    #[test]
    fn prop_save_load_identity(
        pairs in prop::collection::vec((-500.0f64..500.0, any::<u16>()), 0..24),
        policy in policy(),
        base in 0usize..64
    ) {
        let table = filled(&pairs, policy);
        let mut store = MemoryStore::new(base + Table::LAYOUT.len);

        table.save(&mut store, base).unwrap();

        let mut restored = Table::with_config(*table.config());
        restored.load(&mut store, base).unwrap();

        prop_assert_eq!(restored.raw_keys(), table.raw_keys());
        prop_assert_eq!(restored.raw_values(), table.raw_values());
        prop_assert_eq!(restored, table);
    }
}
