//! Relevancy scoring and view boosting.
//!
//! Two scoring modes derive a relevancy score per record: dividing the
//! backend confidence score by a fixed normalization divisor, or a linear
//! decay over post-interleave rank position. The view booster then folds
//! popularity into the score under the relevancy+views strategy:
//!
//! ```text
//! relevancy' = unique_views * relevancy ^ (1 / (boost / 15 + 1))
//! ```

use crate::config::ScoringMode;
use crate::error::SearchError;
use crate::types::Record;

/// Compute `relevancy_score` for every record in place.
///
/// # Errors
///
/// Under [`ScoringMode::Confidence`], a record without a confidence score
/// is a backend contract violation and fails the run.
pub fn apply_scoring(records: &mut [Record], mode: ScoringMode) -> Result<(), SearchError> {
    match mode {
        ScoringMode::Confidence { divisor } => {
            for record in records.iter_mut() {
                let confidence = record.confidence_score.ok_or_else(|| {
                    SearchError::MalformedRecord(format!(
                        "record {} has no confidence score",
                        record.app_id
                    ))
                })?;
                record.relevancy_score = Some(confidence / divisor);
            }
        }
        ScoringMode::Position => {
            let total = records.len() as f64;
            for (index, record) in records.iter_mut().enumerate() {
                record.relevancy_score = Some((total - index as f64) / total);
            }
        }
    }
    Ok(())
}

/// Recompute `relevancy_score` as a function of view count, in place.
///
/// `boost_views` of 0 gives exponent 1 (score scales linearly with
/// views); at 10 the exponent bottoms out near 0.6, flattening the
/// relevancy component so views dominate. Zero views force a zero score.
///
/// # Errors
///
/// Every record must already carry a relevancy score; the booster never
/// runs before the scorer.
pub fn boost_views(records: &mut [Record], boost_views: u8) -> Result<(), SearchError> {
    let exponent = 1.0 / (f64::from(boost_views) / 15.0 + 1.0);
    for record in records.iter_mut() {
        let relevancy = record.relevancy_score.ok_or_else(|| {
            SearchError::MalformedRecord(format!(
                "record {} reached the view booster unscored",
                record.app_id
            ))
        })?;
        record.relevancy_score = Some(record.unique_views as f64 * relevancy.powf(exponent));
    }
    Ok(())
}
