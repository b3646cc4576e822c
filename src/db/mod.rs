//! Database abstraction layer.
//!
//! Trait-based access to the todo collection so the HTTP layer does not
//! depend on a concrete storage backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Todo, NewTodo)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed document collection

mod error;
mod models;
mod repository;
pub mod sqlite;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
