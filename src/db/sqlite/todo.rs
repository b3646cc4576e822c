//! SQLite TodoRepository implementation.

use std::time::Duration;

use futures_util::TryStreamExt;
use sqlx::SqlitePool;
use sqlx::types::Json;

use super::helpers::with_timeout;
use crate::db::{DbError, DbResult, NewTodo, Todo, TodoRepository};

/// Deadline for reading the whole collection.
pub(crate) const LIST_TIMEOUT: Duration = Duration::from_secs(30);
/// Deadline for a single insert.
pub(crate) const INSERT_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLx-backed todo collection.
pub struct SqliteTodoRepository {
    pub(crate) pool: SqlitePool,
}

impl SqliteTodoRepository {
    async fn read_collection(&self) -> DbResult<Vec<Todo>> {
        // rowid order is insertion order
        let mut cursor = sqlx::query_as::<_, (String, String)>(
            "SELECT id, document FROM todos ORDER BY rowid",
        )
        .fetch(&self.pool);

        let mut todos = Vec::new();
        while let Some((id, document)) = cursor.try_next().await? {
            let body: NewTodo =
                serde_json::from_str(&document).map_err(|e| DbError::InvalidData {
                    message: format!("todo '{}' could not be decoded: {}", id, e),
                    help: "Each document must be an object with a string title and a boolean done"
                        .to_string(),
                })?;
            todos.push(body.into_todo(id));
        }

        Ok(todos)
    }
}

impl TodoRepository for SqliteTodoRepository {
    async fn list_all(&self) -> DbResult<Vec<Todo>> {
        with_timeout("list todos", LIST_TIMEOUT, self.read_collection()).await
    }

    async fn insert_one(&self, todo: &NewTodo) -> DbResult<String> {
        with_timeout("insert todo", INSERT_TIMEOUT, async {
            let id: String =
                sqlx::query_scalar("INSERT INTO todos (document) VALUES (?) RETURNING id")
                    .bind(Json(todo))
                    .fetch_one(&self.pool)
                    .await?;
            Ok(id)
        })
        .await
    }
}
