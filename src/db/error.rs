//! Database error types.
//!
//! Storage-backend agnostic errors for the record store, rendered with
//! miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Invalid data: {message} (hint: {help})")]
    #[diagnostic(code(todos::db::invalid_data))]
    InvalidData { message: String, help: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(todos::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(todos::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(todos::db::connection_error),
        help("Check the database URL and that the database is reachable")
    )]
    Connection { message: String },

    #[error("Timed out after {seconds}s while trying to {operation}")]
    #[diagnostic(code(todos::db::timeout))]
    Timeout { operation: String, seconds: u64 },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => DbError::InvalidData {
                message: e.to_string(),
                help: "The stored document does not match the todo layout".to_string(),
            },
            _ => DbError::Database {
                message: e.to_string(),
            },
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
