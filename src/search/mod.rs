//! Search engine integration.
//!
//! The service makes a single indexing call when it boots. How that call
//! relates to the HTTP surface is chosen with [`IndexingMode`].

mod error;
mod indexer;


use clap::ValueEnum;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub use error::{SearchError, SearchResult};
pub use indexer::SearchIndexer;

/// Default search engine endpoint.
pub const DEFAULT_SEARCH_URL: &str = "http://localhost:9200";

/// Index written to by the startup call.
pub const STARTUP_INDEX: &str = "my_index";

/// How the startup indexing call is coupled to server startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IndexingMode {
    /// Do not contact the search engine.
    Skip,
    /// Index in the background; failures are logged and never stop the server.
    #[default]
    BestEffort,
    /// Index before serving; any failure aborts startup.
    Required,
}

/// Perform the startup indexing call according to `mode`.
///
/// In [`IndexingMode::BestEffort`] the call is spawned and its handle is
/// returned; the caller does not need to await it. In
/// [`IndexingMode::Required`] the call completes before this returns and
/// its error is propagated.
pub async fn index_on_startup(
    mode: IndexingMode,
    search_url: &str,
) -> SearchResult<Option<JoinHandle<()>>> {
    match mode {
        IndexingMode::Skip => {
            info!("Startup indexing skipped");
            Ok(None)
        }
        IndexingMode::Required => {
            SearchIndexer::new(search_url)?
                .index_document(STARTUP_INDEX)
                .await?;
            Ok(None)
        }
        IndexingMode::BestEffort => {
            let search_url = search_url.to_string();
            let handle = tokio::spawn(async move {
                let result = match SearchIndexer::new(search_url) {
                    Ok(indexer) => indexer.index_document(STARTUP_INDEX).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    error!(error = %e, "Startup indexing failed; continuing without it");
                }
            });
            Ok(Some(handle))
        }
    }
}
