//! Stimulus sampling with balanced condition labels.
//!
//! One run: load stimuli, shuffle them and a balanced label pool
//! independently, keep the first N, label record `i` with `pool[i]`, write.
//! The random source is a parameter; the binary passes the thread RNG, tests
//! pass a seeded `SmallRng`.

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{CONDITION_COUNT, CONDITION_FIELD};
use crate::error::DataError;
use crate::storage::{load_stimuli, write_stimuli};
use crate::types::{Condition, StimulusRecord};

/// `n / 3` copies of each condition, in [`Condition::ALL`] order.
///
/// When `n` is not a multiple of 3 the pool is shorter than `n`.
pub fn build_label_pool(n: usize) -> Vec<Condition> {
    let per_condition = n / CONDITION_COUNT;
    Condition::ALL
        .iter()
        .flat_map(|&c| std::iter::repeat(c).take(per_condition))
        .collect()
}

/// Shuffle, truncate to `n` and label `records`.
///
/// Fails with [`DataError::IndexOutOfRange`] when either the label pool or
/// the record list is shorter than `n`. The pool is checked first at each
/// index.
pub fn sample_and_label<R: Rng + ?Sized>(
    mut records: Vec<StimulusRecord>,
    n: usize,
    rng: &mut R,
) -> Result<Vec<StimulusRecord>, DataError> {
    let mut pool = build_label_pool(n);

    records.shuffle(rng);
    pool.shuffle(rng);
    records.truncate(n);

    let available = records.len();
    for i in 0..n {
        let label = pool.get(i).ok_or(DataError::IndexOutOfRange {
            sequence: "label pool",
            index: i,
            len: pool.len(),
        })?;
        let record = records.get_mut(i).ok_or(DataError::IndexOutOfRange {
            sequence: "stimulus sample",
            index: i,
            len: available,
        })?;
        let fields = record
            .as_object_mut()
            .ok_or(DataError::NotAnObject { index: i })?;
        fields.insert(
            CONDITION_FIELD.to_string(),
            StimulusRecord::String(label.as_str().to_string()),
        );
    }

    Ok(records)
}

/// Full sampler run from `input` to `output`. Returns the number of records
/// written. `input` is only read.
pub fn run<R: Rng + ?Sized>(
    input: &Path,
    output: &Path,
    n: usize,
    rng: &mut R,
) -> Result<usize, DataError> {
    let records = load_stimuli(input)?;
    let total = records.len();
    let sampled = sample_and_label(records, n, rng)?;
    write_stimuli(output, &sampled)?;
    tracing::debug!(total, sampled = sampled.len(), "sampled stimuli");
    Ok(sampled.len())
}
