//! Fair round-robin interleaving of backend result sets.
//!
//! Interleaving is a fairness policy, not a relevance merge: the sets
//! come from sources of differing reliability (e.g. a "popular" and an
//! "unpopular" index) and each gets a fair share of early ranking slots
//! regardless of its result count.

use crate::types::{Record, ResultSet};

/// Merge result sets by taking one record from each set in turn.
///
/// A single set is returned unchanged. With two sets the output
/// alternates A, B, A, B, … preserving each input's internal order; once
/// one set is exhausted, the rest of the other is appended in its
/// original order. No placeholder records are ever produced.
pub fn interleave(sets: Vec<ResultSet>) -> Vec<Record> {
    let total = sets.iter().map(|set| set.len()).sum();
    let mut merged = Vec::with_capacity(total);
    let mut iters: Vec<_> = sets.into_iter().map(Vec::into_iter).collect();

    loop {
        let mut exhausted = true;
        for iter in &mut iters {
            if let Some(record) = iter.next() {
                merged.push(record);
                exhausted = false;
            }
        }
        if exhausted {
            break;
        }
    }

    merged
}
