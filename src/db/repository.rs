//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewTodo, Todo},
};

/// Repository over the todo collection.
pub trait TodoRepository {
    /// Return every record in the collection, in the store's natural order.
    ///
    /// Either the whole collection is returned or the call fails; partial
    /// results are never handed back.
    fn list_all(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Insert a single document and return the id the store assigned to it.
    fn insert_one(&self, todo: &NewTodo) -> impl Future<Output = DbResult<String>> + Send;
}

/// Database abstraction that provides access to the todo collection.
///
/// Uses an associated type so handlers stay generic over the backend
/// without dynamic dispatch.
pub trait Database: Send + Sync {
    type Todos: TodoRepository + Send + Sync;

    /// Apply pending schema migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo collection.
    fn todos(&self) -> &Self::Todos;
}
