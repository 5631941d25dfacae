//! HTTP client construction for backend requests.
//!
//! Provides a configured [`reqwest::Client`] with the timeout taken from
//! the search configuration. Gzip and brotli decompression come from the
//! crate features.

use crate::config::SearchConfig;
use crate::error::SearchError;
use std::time::Duration;

/// Build a [`reqwest::Client`] for querying a hosted search service.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.backend.timeout_seconds))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendOptions;

    #[test]
    fn build_client_with_default_config() {
        let config = SearchConfig::default();
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn build_client_with_custom_timeout() {
        let config = SearchConfig {
            backend: BackendOptions {
                timeout_seconds: 30,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }
}
