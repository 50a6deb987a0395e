//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check store/get round trips and the instrumentation
//! bookkeeping over arbitrary call sequences.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{Cache, Decode, Decoded, Value, STORE};
use crate::instrument::{inputs_key, outputs_key, replay};
use crate::store::{MemoryStore, StoreClient};

// == Strategies ==
/// Generates values of every supported kind
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<String>().prop_map(Value::Text),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::Bytes),
        any::<i64>().prop_map(Value::Integer),
        any::<f64>().prop_map(Value::Float),
    ]
}

/// Generates keys that can never collide with a generated UUID
fn foreign_key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,32}"
}

fn new_cache() -> Cache<MemoryStore> {
    Cache::new(MemoryStore::new()).unwrap()
}

fn list(cache: &mut Cache<MemoryStore>, key: &str) -> Vec<String> {
    cache
        .client_mut()
        .lrange(key, 0, -1)
        .unwrap()
        .into_iter()
        .map(|b| String::from_utf8_lossy(&b).into_owned())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any value, reading the key back without decoding returns the
    // value's canonical bytes.
    #[test]
    fn prop_roundtrip_identity(value in value_strategy()) {
        let mut cache = new_cache();

        let key = cache.store(value.clone()).unwrap();
        let raw = cache.get(&key, Decode::Identity).unwrap();

        prop_assert_eq!(raw, Some(Decoded::Bytes(value.to_bytes())));
    }

    // Typed getters invert the canonical encoding of their own type.
    #[test]
    fn prop_typed_roundtrip(text in any::<String>(), int in any::<i64>(), float in -1e300f64..1e300f64) {
        let mut cache = new_cache();

        let text_key = cache.store(text.clone()).unwrap();
        let int_key = cache.store(int).unwrap();
        let float_key = cache.store(float).unwrap();

        prop_assert_eq!(cache.get_str(&text_key).unwrap(), Some(text));
        prop_assert_eq!(cache.get_int(&int_key).unwrap(), Some(int));
        prop_assert_eq!(cache.get_float(&float_key).unwrap(), Some(float));
    }

    // After N stores the invocation counter reads N.
    #[test]
    fn prop_counter_matches_calls(values in prop::collection::vec(value_strategy(), 0..40)) {
        let mut cache = new_cache();
        let calls = values.len() as i64;

        for value in values {
            cache.store(value).unwrap();
        }

        prop_assert_eq!(cache.stats().unwrap().store_calls, calls);
        prop_assert_eq!(replay(&mut cache, &STORE).unwrap().count, calls);
    }

    // History lists stay index-aligned with the calls that produced them.
    #[test]
    fn prop_history_aligned(values in prop::collection::vec(value_strategy(), 1..40)) {
        let mut cache = new_cache();
        let mut keys = Vec::new();

        for value in &values {
            keys.push(cache.store(value.clone()).unwrap());
        }

        let inputs = list(&mut cache, &inputs_key("Cache.store"));
        let outputs = list(&mut cache, &outputs_key("Cache.store"));

        prop_assert_eq!(inputs.len(), values.len());
        prop_assert_eq!(outputs.len(), values.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(&inputs[i], &value.to_string());
            prop_assert_eq!(&outputs[i], &keys[i]);
        }
    }

    // Keys never handed out by store read as absent, not as an error.
    #[test]
    fn prop_foreign_key_absent(
        values in prop::collection::vec(value_strategy(), 0..10),
        key in foreign_key_strategy()
    ) {
        let mut cache = new_cache();
        for value in values {
            cache.store(value).unwrap();
        }

        prop_assert_eq!(cache.get(&key, Decode::Identity).unwrap(), None);
    }

    // Every store call issues a key no earlier call returned.
    #[test]
    fn prop_keys_unique(values in prop::collection::vec(value_strategy(), 1..60)) {
        let mut cache = new_cache();
        let mut seen = HashSet::new();

        for value in values {
            let key = cache.store(value).unwrap();
            prop_assert!(seen.insert(key), "Key issued twice");
        }
    }
}
