//! HTTP handlers.

mod system;
mod todos;

#[cfg(test)]
mod system_test;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::DbError;

pub use system::*;
pub use todos::*;

/// Handler failures.
///
/// Rendered as a plain-text body; only successful responses are JSON.
/// Store causes are kept for logging and never sent to the client.
#[derive(Error, Debug)]
pub enum TodoApiError {
    #[error("{0}")]
    InvalidBody(String),

    #[error("Error decoding todos")]
    Decode(#[source] DbError),

    #[error("Error retrieving todos")]
    Retrieve(#[source] DbError),

    #[error("Error inserting todo")]
    Insert(#[source] DbError),
}

impl TodoApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            TodoApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            TodoApiError::Decode(_) | TodoApiError::Retrieve(_) | TodoApiError::Insert(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TodoApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
