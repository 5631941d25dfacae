//! Ranking strategies over scored records.
//!
//! All sorts are stable: records with equal keys keep their relative
//! interleaved arrival order.

use crate::config::RankingStrategy;
use crate::error::SearchError;
use crate::types::Record;

use super::scoring;

/// Order `records` in place according to `strategy`.
///
/// `RelevancyViews` applies the view booster before sorting; the other
/// strategies leave relevancy scores untouched. `SourceOrder` keeps the
/// interleaved order as-is.
///
/// # Errors
///
/// Sorting by relevancy requires every record to carry a computed score;
/// a missing score fails the run rather than sorting on a default.
pub fn rank(
    records: &mut [Record],
    strategy: RankingStrategy,
    boost_views: u8,
) -> Result<(), SearchError> {
    match strategy {
        RankingStrategy::Relevancy => sort_by_relevancy(records)?,
        RankingStrategy::RelevancyViews => {
            scoring::boost_views(records, boost_views)?;
            sort_by_relevancy(records)?;
        }
        RankingStrategy::UniqueViews => {
            records.sort_by(|a, b| b.unique_views.cmp(&a.unique_views));
        }
        RankingStrategy::SourceOrder => {}
    }
    Ok(())
}

fn sort_by_relevancy(records: &mut [Record]) -> Result<(), SearchError> {
    for record in records.iter() {
        if record.relevancy_score.is_none() {
            return Err(SearchError::MalformedRecord(format!(
                "record {} reached the ranker unscored",
                record.app_id
            )));
        }
    }
    records.sort_by(|a, b| {
        let a_score = a.relevancy_score.unwrap_or(f64::NEG_INFINITY);
        let b_score = b.relevancy_score.unwrap_or(f64::NEG_INFINITY);
        b_score.total_cmp(&a_score)
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(app_id: &str, unique_views: u64, relevancy: Option<f64>) -> Record {
        Record {
            app_id: app_id.to_string(),
            title: format!("App {app_id}"),
            owner: "ada".into(),
            unique_views,
            confidence_score: None,
            relevancy_score: relevancy,
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.app_id.as_str()).collect()
    }

    #[test]
    fn relevancy_sorts_descending() {
        let mut records = vec![
            make_record("low", 0, Some(0.2)),
            make_record("high", 0, Some(0.9)),
            make_record("mid", 0, Some(0.5)),
        ];
        rank(&mut records, RankingStrategy::Relevancy, 0).expect("rank");
        assert_eq!(ids(&records), ["high", "mid", "low"]);
    }

    #[test]
    fn relevancy_ties_keep_arrival_order() {
        let mut records = vec![
            make_record("first", 0, Some(0.5)),
            make_record("second", 0, Some(0.5)),
            make_record("third", 0, Some(0.5)),
        ];
        rank(&mut records, RankingStrategy::Relevancy, 0).expect("rank");
        assert_eq!(ids(&records), ["first", "second", "third"]);
    }

    #[test]
    fn relevancy_does_not_apply_view_boost() {
        let mut records = vec![
            make_record("few-views", 1, Some(0.9)),
            make_record("many-views", 1000, Some(0.1)),
        ];
        rank(&mut records, RankingStrategy::Relevancy, 5).expect("rank");
        assert_eq!(ids(&records), ["few-views", "many-views"]);
    }

    #[test]
    fn relevancy_views_boosts_then_sorts() {
        // boost 0: score' = views * relevancy.
        let mut records = vec![
            make_record("a", 2, Some(0.9)),  // 1.8
            make_record("b", 10, Some(0.5)), // 5.0
        ];
        rank(&mut records, RankingStrategy::RelevancyViews, 0).expect("rank");
        assert_eq!(ids(&records), ["b", "a"]);
        assert_eq!(records[0].relevancy_score, Some(5.0));
    }

    #[test]
    fn unique_views_ignores_relevancy() {
        let mut records = vec![
            make_record("a", 3, Some(0.9)),
            make_record("b", 30, Some(0.1)),
            make_record("c", 7, Some(0.5)),
        ];
        rank(&mut records, RankingStrategy::UniqueViews, 0).expect("rank");
        assert_eq!(ids(&records), ["b", "c", "a"]);
    }

    #[test]
    fn unique_views_ties_keep_arrival_order() {
        let mut records = vec![
            make_record("first", 5, None),
            make_record("second", 5, None),
        ];
        rank(&mut records, RankingStrategy::UniqueViews, 0).expect("rank");
        assert_eq!(ids(&records), ["first", "second"]);
    }

    #[test]
    fn source_order_is_noop() {
        let mut records = vec![
            make_record("a", 1, Some(0.1)),
            make_record("b", 9, Some(0.9)),
        ];
        rank(&mut records, RankingStrategy::SourceOrder, 0).expect("rank");
        assert_eq!(ids(&records), ["a", "b"]);
    }

    #[test]
    fn unscored_record_fails_relevancy_sort() {
        let mut records = vec![make_record("a", 1, Some(0.5)), make_record("b", 1, None)];
        let err = rank(&mut records, RankingStrategy::Relevancy, 0).unwrap_err();
        assert!(matches!(err, SearchError::MalformedRecord(_)), "{err}");
    }
}
