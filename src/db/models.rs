//! Domain models for the todo store.
//!
//! These models are storage-agnostic. The HTTP layer has its own DTOs in
//! `api::handlers`.

use serde::{Deserialize, Serialize};

/// A stored todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Opaque identifier assigned by the store.
    pub id: String,
    pub title: String,
    pub done: bool,
}

/// The document body persisted for each todo.
///
/// This is everything in a [`Todo`] except the id, which lives outside the
/// document and is assigned by the store on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, done: bool) -> Self {
        Self {
            title: title.into(),
            done,
        }
    }

    /// Attach a store-assigned id, producing the full record.
    pub fn into_todo(self, id: String) -> Todo {
        Todo {
            id,
            title: self.title,
            done: self.done,
        }
    }
}
