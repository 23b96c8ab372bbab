use serde::{Deserialize, Serialize};

use crate::models::Todo;

/// User record as stored
///
/// Deliberately carries no `todos` field: the todos attached to a user in
/// the aggregate response are a per-request view, never written back onto
/// the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique id assigned by the store at creation time
    pub id: u64,
    pub name: String,
}

/// Aggregation view of a user together with their todos
///
/// Built per request by the aggregation layer; serializes flat as
/// `{"id": …, "name": …, "todos": […]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithTodos {
    #[serde(flatten)]
    pub user: User,
    pub todos: Vec<Todo>,
}
