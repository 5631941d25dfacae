//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] fixes the ranking strategy, scoring mode, and pipeline
//! parameters for one run, plus the pass-through knobs forwarded verbatim
//! to the backend. Validation happens at the pipeline boundary, before any
//! backend call is made.

use crate::error::SearchError;

/// How the final result sequence is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingStrategy {
    /// Stable sort descending by the scorer's relevancy (no view boost).
    Relevancy,
    /// Apply the view booster, then stable sort descending by the boosted
    /// relevancy.
    RelevancyViews,
    /// Ignore relevancy entirely; stable sort descending by view count.
    UniqueViews,
    /// Keep the interleaved backend order; no re-sort.
    SourceOrder,
}

/// How per-record relevancy is derived. Exactly one mode is active per
/// pipeline run, chosen at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringMode {
    /// `relevancy = confidence_score / divisor`. Requires the backend to
    /// be asked for confidence scores.
    Confidence { divisor: f64 },
    /// Linear rank decay: record at zero-based position `i` of `N` gets
    /// `relevancy = (N - i) / N`. Used when the backend supplies no
    /// usable confidence score.
    Position,
}

impl Default for ScoringMode {
    fn default() -> Self {
        Self::Confidence { divisor: 3.0 }
    }
}

/// Backend-specific ranking hints, forwarded verbatim and opaque to the
/// pipeline.
#[derive(Debug, Clone)]
pub struct BackendOptions {
    /// Ask the backend to return a confidence score per record.
    pub return_confidence_scores: bool,
    /// Header-term retrieval weight multiplier, when set.
    pub header_multiplier: Option<u32>,
    /// Disable the backend's reranker.
    pub disable_reranker: bool,
    /// Numeric scoring-function weight on the backend's `score` column,
    /// when set.
    pub score_weight: Option<u32>,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            return_confidence_scores: true,
            header_multiplier: None,
            disable_reranker: false,
            score_weight: None,
            timeout_seconds: 8,
        }
    }
}

/// Configuration for one search run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Ranking strategy for the final ordering.
    pub strategy: RankingStrategy,
    /// How relevancy is derived from backend output.
    pub scoring: ScoringMode,
    /// View boost exponent parameter, 0–10 inclusive. Higher values make
    /// view count dominate ranking more strongly relative to relevance.
    pub boost_views: u8,
    /// Minimum view count a record must have to survive the post-filter.
    pub minimum_views: u64,
    /// Per-backend result limit.
    pub limit: usize,
    /// Number of records per display batch.
    pub batch_size: usize,
    /// Pass-through backend options.
    pub backend: BackendOptions,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: RankingStrategy::RelevancyViews,
            scoring: ScoringMode::default(),
            boost_views: 1,
            minimum_views: 3,
            limit: 20,
            batch_size: 3,
            backend: BackendOptions::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `boost_views` must be at most 10
    /// - `minimum_views` has no upper bound; any u64 is valid
    /// - `limit` and `batch_size` must be greater than 0
    /// - `backend.timeout_seconds` must be greater than 0
    /// - `Confidence` scoring requires `return_confidence_scores` and a
    ///   positive, finite divisor
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.boost_views > 10 {
            return Err(SearchError::Config(format!(
                "boost_views must be between 0 and 10, got {}",
                self.boost_views
            )));
        }
        if self.limit == 0 {
            return Err(SearchError::Config("limit must be greater than 0".into()));
        }
        if self.batch_size == 0 {
            return Err(SearchError::Config(
                "batch_size must be greater than 0".into(),
            ));
        }
        if self.backend.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if let ScoringMode::Confidence { divisor } = self.scoring {
            if !self.backend.return_confidence_scores {
                return Err(SearchError::Config(
                    "confidence scoring requires return_confidence_scores".into(),
                ));
            }
            if !(divisor.is_finite() && divisor > 0.0) {
                return Err(SearchError::Config(format!(
                    "confidence divisor must be positive and finite, got {divisor}"
                )));
            }
        }
        Ok(())
    }
}
