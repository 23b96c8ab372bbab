//! Todos Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use store::{SharedStore, Store};

use axum::{routing::get, Router};

use routes::{
    create_todo, create_user, health_check, list_todos, list_users, remove_todo, toggle_todo,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: SharedStore, config: Config) -> Self {
        Self { store, config }
    }
}

/// Build the application router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/todos",
            get(list_todos)
                .post(create_todo)
                .put(toggle_todo)
                .delete(remove_todo),
        )
        .route("/api/users", get(list_users).post(create_user))
        .with_state(state)
}
