use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Reports the current collection sizes along with the server version.
/// Used by load balancers and monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.read().await;

    Json(json!({
        "status": "healthy",
        "users": store.users.len(),
        "todos": store.todos.len(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
