//! # gallery-search
//!
//! Semantic search front-end for an app gallery.
//!
//! This crate queries one or two managed semantic-search backends and
//! turns their ordered, confidence-scored hits into ranked, deduplicated,
//! popularity-filtered display batches. The backends own query execution
//! and relevance ranking; everything after their responses land is the
//! aggregation pipeline in this crate.
//!
//! ## Design
//!
//! - Backends are injected explicitly; no process-wide session singletons
//! - Two backends (e.g. a "popular" and an "unpopular" index) are queried
//!   concurrently, then merged with fair round-robin interleaving
//! - Relevancy is derived either from backend confidence scores or from
//!   rank position, chosen at configuration time
//! - A tunable view-count boost folds popularity into the ranking
//! - Duplicates collapse to the earliest-ranked instance per `app_id`
//! - A run either produces complete results or fails as a whole: no
//!   retries, no partial result sets, no silent field coercion

pub mod backend;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod pipeline;
pub mod types;

pub use backend::{RestBackend, SearchBackend};
pub use config::{BackendOptions, RankingStrategy, ScoringMode, SearchConfig};
pub use error::{Result, SearchError};
pub use filter::Filter;
pub use pipeline::batch::Batches;
pub use types::{Record, ResultSet};

/// Query one or two backends and run the full aggregation pipeline.
///
/// Backend queries are issued concurrently and both must succeed before
/// interleaving begins; any failure fails the whole run. The returned
/// records are interleaved, scored, ranked per `config.strategy`,
/// deduplicated, and filtered by `config.minimum_views`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for invalid configuration or a backend
/// count other than one or two (rejected before any query is issued), and
/// propagates backend and malformed-record errors unmodified.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gallery_search::Result<()> {
/// use gallery_search::{search, Filter, RestBackend, SearchConfig};
/// use url::Url;
///
/// let endpoint = Url::parse("https://search.example.com/services/apps:query")
///     .expect("static URL");
/// let popular = RestBackend::new(endpoint, "popular", None);
/// let filter = Filter::eq("OWNER", "ada");
///
/// let records = search(&[popular], "chat", Some(&filter), &SearchConfig::default()).await?;
/// for record in &records {
///     println!("{}: {} views", record.title, record.unique_views);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search<B: SearchBackend>(
    backends: &[B],
    query: &str,
    filter: Option<&Filter>,
    config: &SearchConfig,
) -> Result<Vec<Record>> {
    config.validate()?;
    if backends.is_empty() || backends.len() > 2 {
        return Err(SearchError::Config(format!(
            "search requires one or two backends, got {}",
            backends.len()
        )));
    }

    tracing::trace!(query, backends = backends.len(), "search");

    let queries = backends
        .iter()
        .map(|backend| backend.search(query, filter, config));
    let sets = futures::future::try_join_all(queries).await?;

    pipeline::run(sets, config)
}

/// Like [`search`], but partitions the final sequence into display
/// batches of `config.batch_size` records.
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_batched<B: SearchBackend>(
    backends: &[B],
    query: &str,
    filter: Option<&Filter>,
    config: &SearchConfig,
) -> Result<Batches> {
    let records = search(backends, query, filter, config).await?;
    Ok(pipeline::batch::batches(records, config.batch_size))
}
