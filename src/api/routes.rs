//! HTTP API route definitions

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::AppState;
use crate::store::TodoStore;

/// Create the main API router with all routes
pub fn create_router<S: TodoStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Todo collection (also answers without the trailing slash)
        .route("/todos", get(handlers::todos::list_todos::<S>))
        .route("/todos", post(handlers::todos::create_todo::<S>))
        .route("/todos/", get(handlers::todos::list_todos::<S>))
        .route("/todos/", post(handlers::todos::create_todo::<S>))
        // Single todos
        .route("/todos/{todo_id}", get(handlers::todos::get_todo::<S>))
        .route("/todos/{todo_id}", put(handlers::todos::update_todo::<S>))
        .route("/todos/{todo_id}", delete(handlers::todos::delete_todo::<S>))
        .with_state(state)
}
