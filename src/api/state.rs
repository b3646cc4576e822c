//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database`, so handlers work with any store
/// implementation. The store is injected via the constructor and shared
/// between request tasks through an `Arc`.
pub struct AppState<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - only the Arc needs to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState around the given database.
    pub fn new(db: D) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }
}
