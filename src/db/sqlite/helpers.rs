//! Shared helpers for SQLite repositories.

use std::future::Future;
use std::time::Duration;

use crate::db::{DbError, DbResult};

/// Run a store call under a deadline.
///
/// The deadline covers only `call`; it is dropped as soon as the call
/// returns, whatever the outcome.
pub(crate) async fn with_timeout<T, F>(operation: &str, limit: Duration, call: F) -> DbResult<T>
where
    F: Future<Output = DbResult<T>>,
{
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| DbError::Timeout {
            operation: operation.to_string(),
            seconds: limit.as_secs(),
        })?
}
