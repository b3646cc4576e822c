//! API route configuration.

use axum::Router;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, CreateTodoRequest, HealthResponse, TodoResponse};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// Registers handlers that are generic over the Database trait, applying
/// the turbofish automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todos API",
        version = "0.1.0",
        description = "To-do list backed by a document collection",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::healthcheck,
        handlers::list_todos,
        handlers::add_todo,
    ),
    components(
        schemas(
            HealthResponse,
            TodoResponse,
            CreateTodoRequest,
        )
    ),
    tags(
        (name = "system", description = "Liveness endpoint"),
        (name = "todos", description = "Todo collection endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/healthcheck", get(handlers::healthcheck));

    // Todo routes (generic over Database)
    let todo_routes = routes!(D => {
        get "/todos" => handlers::list_todos,
        post "/todos/add" => handlers::add_todo,
    });

    system_routes
        .merge(todo_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
