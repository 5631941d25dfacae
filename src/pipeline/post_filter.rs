//! Minimum-views threshold filter.

use crate::types::Record;

/// Keep only records with `unique_views >= minimum_views`.
///
/// Order is preserved; no re-sorting or re-ranking happens here.
pub fn post_filter(records: Vec<Record>, minimum_views: u64) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| record.unique_views >= minimum_views)
        .collect()
}
