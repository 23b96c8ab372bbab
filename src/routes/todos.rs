use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::Todo;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListTodosParams {
    #[serde(rename = "userId")]
    pub user_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleTodoRequest {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct RemoveTodoParams {
    pub id: u64,
}

/// List todos, optionally filtered by the `userId` query parameter
///
/// An unknown `userId` yields an empty list, never an error.
pub async fn list_todos(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListTodosParams>, QueryRejection>,
) -> Result<Json<Vec<Todo>>> {
    let Query(params) = params?;

    let store = state.store.read().await;
    Ok(Json(store.todos.list(params.user_id)))
}

/// Create a new todo for a user
///
/// The new record starts with `done = false` and is returned as the
/// response body. The `userId` is taken at face value; no check that the
/// user exists.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>> {
    let Json(payload) = payload?;

    let mut store = state.store.write().await;
    let todo = store.todos.create(payload.user_id, payload.title);

    tracing::info!("Created todo {} for user {}", todo.id, todo.user_id);

    Ok(Json(todo))
}

/// Toggle a todo's `done` flag
///
/// Responds with the updated record, or JSON `null` when no todo has the
/// given id. Absence is a sentinel here, not an error status.
pub async fn toggle_todo(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ToggleTodoRequest>, JsonRejection>,
) -> Result<Json<Option<Todo>>> {
    let Json(payload) = payload?;

    let mut store = state.store.write().await;
    let todo = store.todos.toggle(payload.id);

    match &todo {
        Some(todo) => tracing::info!("Toggled todo {} to done={}", todo.id, todo.done),
        None => tracing::info!("Toggle requested for missing todo {}", payload.id),
    }

    Ok(Json(todo))
}

/// Remove a todo by the `id` query parameter
///
/// Responds with `true` when a record was removed, `false` when none
/// matched.
pub async fn remove_todo(
    State(state): State<AppState>,
    params: std::result::Result<Query<RemoveTodoParams>, QueryRejection>,
) -> Result<Json<bool>> {
    let Query(params) = params?;

    let mut store = state.store.write().await;
    let removed = store.todos.remove(params.id);

    tracing::info!("Remove todo {}: removed={}", params.id, removed);

    Ok(Json(removed))
}
