//! Result aggregation pipeline: interleave, score, rank, dedup, filter,
//! batch.
//!
//! The pipeline is synchronous and CPU-bound; backend I/O happens before
//! it runs. A run either produces a fully ranked, deduplicated, filtered
//! sequence or fails as a whole.

pub mod batch;
pub mod dedup;
pub mod interleave;
pub mod post_filter;
pub mod rank;
pub mod scoring;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{Record, ResultSet};

/// Run the aggregation pipeline over pre-fetched result sets.
///
/// # Pipeline
///
/// 1. Interleave the 1–2 result sets round-robin
/// 2. Compute relevancy per the configured scoring mode
/// 3. Rank per the configured strategy (the relevancy+views strategy
///    applies the view booster first)
/// 4. Deduplicate by `app_id`, first occurrence wins
/// 5. Drop records below the minimum-views threshold
///
/// Batching is a separate presentation step; see [`batch::batches`].
///
/// # Errors
///
/// Rejects invalid configuration and any other record-set count than one
/// or two; malformed records abort the run.
pub fn run(sets: Vec<ResultSet>, config: &SearchConfig) -> Result<Vec<Record>, SearchError> {
    config.validate()?;
    if sets.is_empty() || sets.len() > 2 {
        return Err(SearchError::Config(format!(
            "pipeline accepts one or two result sets, got {}",
            sets.len()
        )));
    }

    let mut records = interleave::interleave(sets);
    tracing::debug!(count = records.len(), "interleaved backend results");

    scoring::apply_scoring(&mut records, config.scoring)?;
    rank::rank(&mut records, config.strategy, config.boost_views)?;

    let records = dedup::deduplicate(records);
    let records = post_filter::post_filter(records, config.minimum_views);
    tracing::debug!(count = records.len(), "pipeline produced final results");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RankingStrategy, ScoringMode};

    fn make_record(app_id: &str, unique_views: u64) -> Record {
        Record {
            app_id: app_id.to_string(),
            title: format!("App {app_id}"),
            owner: "ada".into(),
            unique_views,
            confidence_score: None,
            relevancy_score: None,
        }
    }

    fn position_config() -> SearchConfig {
        SearchConfig {
            scoring: ScoringMode::Position,
            minimum_views: 0,
            ..Default::default()
        }
    }

    #[test]
    fn rejects_zero_result_sets() {
        let err = run(vec![], &position_config()).unwrap_err();
        assert!(err.to_string().contains("one or two"));
    }

    #[test]
    fn rejects_three_result_sets() {
        let sets = vec![vec![], vec![], vec![]];
        let err = run(sets, &position_config()).unwrap_err();
        assert!(err.to_string().contains("one or two"));
    }

    #[test]
    fn rejects_invalid_config_before_anything_else() {
        let config = SearchConfig {
            boost_views: 42,
            ..position_config()
        };
        let err = run(vec![vec![make_record("a", 1)]], &config).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)), "{err}");
    }

    #[test]
    fn source_order_run_preserves_interleaving() {
        let a = vec![make_record("a1", 9), make_record("a2", 9)];
        let b = vec![make_record("b1", 9)];
        let config = SearchConfig {
            strategy: RankingStrategy::SourceOrder,
            ..position_config()
        };
        let records = run(vec![a, b], &config).expect("run");
        let ids: Vec<&str> = records.iter().map(|r| r.app_id.as_str()).collect();
        assert_eq!(ids, ["a1", "b1", "a2"]);
        // Scores are still computed for display.
        assert!(records.iter().all(|r| r.relevancy_score.is_some()));
    }

    #[test]
    fn duplicates_across_sets_collapse_to_earliest_ranked() {
        // "shared" sits at the top of set A and deep in set B. Under
        // source order the A instance arrives first and survives.
        let a = vec![make_record("shared", 5), make_record("a2", 5)];
        let b = vec![make_record("b1", 5), make_record("shared", 5)];
        let config = SearchConfig {
            strategy: RankingStrategy::SourceOrder,
            ..position_config()
        };
        let records = run(vec![a, b], &config).expect("run");
        let ids: Vec<&str> = records.iter().map(|r| r.app_id.as_str()).collect();
        assert_eq!(ids, ["shared", "b1", "a2"]);
    }

    #[test]
    fn minimum_views_applied_after_ranking() {
        let a = vec![make_record("popular", 100), make_record("quiet", 1)];
        let config = SearchConfig {
            minimum_views: 10,
            ..position_config()
        };
        let records = run(vec![a], &config).expect("run");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].app_id, "popular");
    }

    #[test]
    fn single_set_full_run_with_position_scoring() {
        let a = vec![
            make_record("r0", 1),
            make_record("r1", 1),
            make_record("r2", 1),
            make_record("r3", 1),
        ];
        let config = SearchConfig {
            strategy: RankingStrategy::Relevancy,
            ..position_config()
        };
        let records = run(vec![a], &config).expect("run");
        let scores: Vec<f64> = records.iter().map(|r| r.relevancy_score.unwrap()).collect();
        assert_eq!(scores, [1.0, 0.75, 0.5, 0.25]);
    }
}
