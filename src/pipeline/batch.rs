//! Fixed-size display batching.
//!
//! Purely a presentation-chunking utility: it has no effect on ranking
//! or content. The sequence is lazy; re-run the pipeline to iterate
//! again.

use crate::types::Record;

/// Lazy iterator over contiguous, non-overlapping groups of records.
pub struct Batches {
    records: std::vec::IntoIter<Record>,
    size: usize,
}

impl Iterator for Batches {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Vec<Record>> {
        let batch: Vec<Record> = self.records.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}

/// Partition `records` into groups of up to `size`, in original order,
/// the final group possibly smaller.
///
/// `size` must be positive; configuration validation enforces this
/// before the pipeline runs.
pub fn batches(records: Vec<Record>, size: usize) -> Batches {
    debug_assert!(size > 0, "batch size must be positive");
    Batches {
        records: records.into_iter(),
        size,
    }
}
