use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{User, UserWithTodos};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// List users together with their todos
///
/// Returns the aggregation view, last-created user first. One read lock
/// covers both collections, so the attached todos are consistent with the
/// user list.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserWithTodos>> {
    let store = state.store.read().await;
    Json(store.users_with_todos())
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(payload) = payload?;

    let mut store = state.store.write().await;
    let user = store.users.create(payload.name);

    tracing::info!("Created user {} ({})", user.id, user.name);

    Ok(Json(user))
}
