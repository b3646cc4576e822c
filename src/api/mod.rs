//! HTTP API server.

mod handlers;
mod routes;
mod state;


use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::search::{self, DEFAULT_SEARCH_URL, IndexingMode, SearchError};

pub use handlers::TodoApiError;
pub use state::AppState;

/// Default database location; the `todos` collection lives inside it.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://testes.db?mode=rwc";

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind to {addr}")]
    #[diagnostic(
        code(todos::api::bind),
        help("Is another process already listening on this port? Try --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(todos::api::serve))]
    Serve(#[source] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Indexing(#[from] SearchError),
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Database connection URL
    pub database_url: String,
    /// Upper bound for establishing the database connection
    pub connect_timeout: Duration,
    /// Search engine base URL for the startup indexing call
    pub search_url: String,
    /// How startup indexing is coupled to serving
    pub indexing: IndexingMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            indexing: IndexingMode::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by `TODOS_DATABASE_URL` and `TODOS_SEARCH_URL`.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("TODOS_DATABASE_URL") {
            config.database_url = url;
        }
        if let Ok(url) = env::var("TODOS_SEARCH_URL") {
            config.search_url = url;
        }
        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    pub fn with_indexing(mut self, indexing: IndexingMode) -> Self {
        self.indexing = indexing;
        self
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server against an already connected database.
///
/// Performs startup indexing according to `config.indexing`, then serves
/// until the process is stopped.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    search::index_on_startup(config.indexing, &config.search_url).await?;

    let app = routes::create_router(AppState::new(db)).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
