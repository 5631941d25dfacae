//! Pluggable search backends.
//!
//! A backend executes a query with a structured filter against a named
//! search index and returns an ordered [`ResultSet`]. Backends are
//! constructed by the caller and passed explicitly into the pipeline
//! entry points; there is no process-wide backend singleton.

pub mod rest;

pub use rest::RestBackend;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::filter::Filter;
use crate::types::ResultSet;

/// Columns the pipeline requests from every backend.
pub const RESULT_COLUMNS: &[&str] = &["app_id", "title", "unique_views", "owner"];

/// A managed semantic-search backend.
///
/// Implementors own query execution, text relevance ranking, and
/// confidence scoring; the pipeline treats them as black boxes returning
/// ordered records. All implementations must be `Send + Sync` so that two
/// backends can be queried concurrently.
pub trait SearchBackend: Send + Sync {
    /// Execute `query` against this backend and return its ordered hits.
    ///
    /// The filter, result limit, and ranking hints from `config` are
    /// forwarded verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the query fails or a returned record is
    /// malformed. Failures propagate to the caller unmodified; the
    /// pipeline performs no retries.
    fn search(
        &self,
        query: &str,
        filter: Option<&Filter>,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<ResultSet, SearchError>> + Send;

    /// Human-readable backend name for logging.
    fn name(&self) -> &str;
}
