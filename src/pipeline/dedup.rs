//! First-occurrence deduplication by app id.
//!
//! Runs after ranking so that an app appearing in both backend result
//! sets collapses to its earliest-ranked instance.

use std::collections::HashSet;

use crate::types::Record;

/// Drop every record whose `app_id` was already seen earlier in the
/// sequence. The order of survivors is preserved.
pub fn deduplicate(records: Vec<Record>) -> Vec<Record> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.app_id.clone()))
        .collect()
}
