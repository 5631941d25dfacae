//! Error types for the gallery-search crate.
//!
//! A search run either produces a complete ranked, deduplicated, filtered
//! result sequence or fails as a whole: backend failures propagate
//! unmodified (no retries), malformed records abort the run rather than
//! being silently dropped or zero-filled, and invalid configuration is
//! rejected before any backend call is made.

/// Errors that can occur during a search pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An upstream search backend rejected or failed the query.
    #[error("backend error: {0}")]
    Backend(String),

    /// An HTTP request to a search backend failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A backend returned a record missing a required field or carrying a
    /// non-coercible numeric value. Fatal for the run: silent coercion
    /// would corrupt ranking.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for gallery-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
