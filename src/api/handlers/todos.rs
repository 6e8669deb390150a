//! Todo CRUD handlers
//!
//! Each handler performs exactly one store operation and maps its result: a
//! present document becomes JSON, an absent one becomes an empty 404, and
//! any store failure is forwarded unchanged to the error channel.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::AppState;
use crate::error::AppError;
use crate::model::{Todo, TodoDraft};
use crate::store::TodoStore;

/// List every todo in the collection
pub async fn list_todos<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// Get a single todo by id
pub async fn get_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(todo_id): Path<String>,
) -> Result<Response, AppError> {
    match state.store.find_by_id(&todo_id).await? {
        Some(todo) => Ok(Json(todo).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a todo from the request payload
pub async fn create_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(draft): Json<TodoDraft>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = state.store.insert(&draft).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Replace a todo's fields by id, returning the new values
pub async fn update_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(todo_id): Path<String>,
    Json(draft): Json<TodoDraft>,
) -> Result<Response, AppError> {
    match state.store.replace_by_id(&todo_id, &draft).await? {
        Some(todo) => Ok(Json(todo).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Delete a todo by id, returning the removed document
pub async fn delete_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(todo_id): Path<String>,
) -> Result<Response, AppError> {
    match state.store.delete_by_id(&todo_id).await? {
        Some(todo) => Ok(Json(todo).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
