//! Property-based tests for label pools and sample shape.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use expkit::error::DataError;
use expkit::sampler::{build_label_pool, sample_and_label};
use expkit::types::{Condition, StimulusRecord};

fn records(count: usize) -> Vec<StimulusRecord> {
    (0..count).map(|i| json!({ "id": i, "prep": "on" })).collect()
}

fn label_counts(labels: impl IntoIterator<Item = Condition>) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for l in labels {
        let i = Condition::ALL.iter().position(|&c| c == l).unwrap();
        counts[i] += 1;
    }
    counts
}

proptest! {
    // 1. Pool holds floor(n/3) of each label and nothing else
    #[test]
    fn pool_counts(n in 0usize..300) {
        let pool = build_label_pool(n);
        prop_assert_eq!(pool.len(), (n / 3) * 3);
        prop_assert_eq!(label_counts(pool), [n / 3; 3]);
    }

    // 2. Enough records and n divisible by 3: exactly n labeled records,
    //    label multiset equal to the pool
    #[test]
    fn sample_shape(k in 0usize..40, extra in 0usize..40, seed in any::<u64>()) {
        let n = k * 3;
        let mut rng = SmallRng::seed_from_u64(seed);
        let out = sample_and_label(records(n + extra), n, &mut rng).unwrap();
        prop_assert_eq!(out.len(), n);

        let labels: Vec<Condition> = out
            .iter()
            .map(|r| Condition::from_label(r["condition"].as_str().unwrap()).unwrap())
            .collect();
        prop_assert_eq!(label_counts(labels), [k; 3]);
    }

    // 3. Sampled records are distinct input records
    #[test]
    fn sample_without_replacement(k in 1usize..20, extra in 0usize..20, seed in any::<u64>()) {
        let n = k * 3;
        let mut rng = SmallRng::seed_from_u64(seed);
        let out = sample_and_label(records(n + extra), n, &mut rng).unwrap();
        let mut ids: Vec<u64> = out.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), n);
        prop_assert!(ids.iter().all(|&id| (id as usize) < n + extra));
    }

    // 4. n not divisible by 3 always fails, whatever the record count
    #[test]
    fn uneven_n_fails(k in 0usize..30, rem in 1usize..3, extra in 0usize..40, seed in any::<u64>()) {
        let n = k * 3 + rem;
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = sample_and_label(records(n + extra), n, &mut rng);
        let is_index_error = matches!(result, Err(DataError::IndexOutOfRange { .. }));
        prop_assert!(is_index_error);
    }
}
