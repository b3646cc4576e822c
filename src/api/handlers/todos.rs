//! Todo handlers.

use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use utoipa::ToSchema;

use super::TodoApiError;
use crate::api::AppState;
use crate::db::{Database, DbError, NewTodo, Todo, TodoRepository};

// =============================================================================
// DTOs
// =============================================================================

/// Todo response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    /// Store-assigned identifier, omitted when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "buy milk")]
    pub title: String,
    #[schema(example = false)]
    pub done: bool,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            done: t.done,
        }
    }
}

/// Create todo request DTO
///
/// Missing fields take their zero values. An `id` sent by the client is
/// ignored; the store always assigns one.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[serde(default)]
    #[schema(example = "buy milk")]
    pub title: String,
    #[serde(default)]
    #[schema(example = false)]
    pub done: bool,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(req: CreateTodoRequest) -> Self {
        NewTodo::new(req.title, req.done)
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all todos
///
/// Returns the whole collection in store order.
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses(
        (status = 200, description = "Every todo in the collection", body = Vec<TodoResponse>),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
pub async fn list_todos<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<TodoResponse>>, TodoApiError> {
    let todos = state
        .db()
        .todos()
        .list_all()
        .await
        .map_err(list_failure)?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Add a todo
///
/// Inserts the todo, then answers with the full, freshly read collection
/// exactly as `GET /todos` would.
#[utoipa::path(
    post,
    path = "/todos/add",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 200, description = "Every todo, including the new one", body = Vec<TodoResponse>),
        (status = 400, description = "Body is not a valid todo", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state, body))]
pub async fn add_todo<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> Result<Json<Vec<TodoResponse>>, TodoApiError> {
    let req = decode_first_value(&body)?;

    let id = state
        .db()
        .todos()
        .insert_one(&NewTodo::from(req))
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert todo");
            TodoApiError::Insert(e)
        })?;

    info!(%id, "Inserted new todo");

    list_todos(State(state)).await
}

// =============================================================================
// Helpers
// =============================================================================

/// Decode the first JSON value in `body`, whatever its content type.
///
/// Anything after that value is left unread, and a `null` body is an empty
/// todo. An empty body fails with `EOF`.
pub(super) fn decode_first_value(body: &[u8]) -> Result<CreateTodoRequest, TodoApiError> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<CreateTodoRequest>>();
    match values.next() {
        Some(Ok(req)) => Ok(req.unwrap_or_default()),
        Some(Err(e)) => Err(TodoApiError::InvalidBody(e.to_string())),
        None => Err(TodoApiError::InvalidBody("EOF".to_string())),
    }
}

pub(super) fn list_failure(e: DbError) -> TodoApiError {
    error!(error = %e, "Failed to list todos");
    match e {
        DbError::InvalidData { .. } => TodoApiError::Decode(e),
        _ => TodoApiError::Retrieve(e),
    }
}
