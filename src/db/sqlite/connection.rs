//! SQLite connection and migration management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use super::helpers::with_timeout;
use super::todo::SqliteTodoRepository;
use crate::db::{Database, DbError, DbResult};

// Embed migrations from data/sql/sqlite/ at compile time
static MIGRATOR: Migrator = sqlx::migrate!("data/sql/sqlite");

/// SQLite database implementation.
///
/// Owns the connection pool. The pool is reference counted, so the todo
/// repository holds its own handle to the same connections.
pub struct SqliteDatabase {
    pool: SqlitePool,
    todos: SqliteTodoRepository,
}

impl SqliteDatabase {
    /// Connect to the database at `url`.
    ///
    /// The whole attempt, including opening the first connection, must
    /// finish within `timeout`.
    pub async fn connect(url: &str, timeout: Duration) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(url).map_err(|e| DbError::Connection {
            message: format!("invalid database URL '{}': {}", url, e),
        })?;

        let pool = with_timeout(
            "connect to the database",
            timeout,
            async {
                SqlitePoolOptions::new()
                    .acquire_timeout(timeout)
                    .connect_with(options)
                    .await
                    .map_err(|e| DbError::Connection {
                        message: e.to_string(),
                    })
            },
        )
        .await?;

        debug!(url, "database connection established");
        Ok(Self::from_pool(pool))
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// The pool is pinned to a single connection that never expires, since
    /// every SQLite in-memory connection is its own database.
    pub async fn in_memory() -> DbResult<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self::from_pool(pool))
    }

    fn from_pool(pool: SqlitePool) -> Self {
        Self {
            todos: SqliteTodoRepository { pool: pool.clone() },
            pool,
        }
    }

    /// Access the underlying pool for direct queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection. Subsequent store calls fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Database for SqliteDatabase {
    type Todos = SqliteTodoRepository;

    async fn migrate(&self) -> DbResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    fn todos(&self) -> &Self::Todos {
        &self.todos
    }
}
