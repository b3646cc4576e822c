//! Todos API server binary.
//!
//! Connects the concrete database and hands it to the API server. The API
//! layer stays agnostic of the storage backend.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todos::api::{self, ApiError, Config};
use todos::db::{Database, DbError, SqliteDatabase};
use todos::search::IndexingMode;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todos-api")]
#[command(author, version, about = "Todo list API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Database URL (defaults to TODOS_DATABASE_URL, then sqlite://testes.db?mode=rwc)
    #[arg(long)]
    db: Option<String>,

    /// Search engine URL (defaults to TODOS_SEARCH_URL, then http://localhost:9200)
    #[arg(long)]
    search_url: Option<String>,

    /// How the startup indexing call affects server startup
    #[arg(long, value_enum, default_value_t = IndexingMode::BestEffort)]
    indexing: IndexingMode,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    api::init_tracing();

    serve(cli).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    let mut config = Config::new()
        .with_host(cli.host)
        .with_port(cli.port)
        .with_indexing(cli.indexing);
    if let Some(url) = cli.db {
        config = config.with_database_url(url);
    }
    if let Some(url) = cli.search_url {
        config = config.with_search_url(url);
    }

    info!(url = %config.database_url, "Opening database");
    let db = SqliteDatabase::connect(&config.database_url, config.connect_timeout).await?;

    db.migrate().await?;
    info!("Database migrations complete");

    api::run(config, db).await?;
    Ok(())
}
