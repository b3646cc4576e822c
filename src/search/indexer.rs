use std::time::Duration;

use reqwest::Client;
use tracing::{info, instrument};

use super::error::{SearchError, SearchResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the search engine's document indexing endpoint.
pub struct SearchIndexer {
    base_url: String,
    client: Client,
}

impl SearchIndexer {
    /// Create a new indexer against `base_url` (e.g. `http://localhost:9200`).
    pub fn new(base_url: impl Into<String>) -> SearchResult<Self> {
        // reqwest is built without a bundled crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| SearchError::Client { source })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Index a document into `index` under an engine-generated id.
    ///
    /// No document body is attached to the request. Engines that require a
    /// body answer with an error status, which is returned as
    /// [`SearchError::Rejected`].
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn index_document(&self, index: &str) -> SearchResult<()> {
        let url = format!("{}/{}/_doc", self.base_url, index);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|source| SearchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        info!(%status, index, "Document indexed successfully");
        Ok(())
    }
}
