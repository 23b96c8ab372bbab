use serde::{Deserialize, Serialize};

/// A single todo item belonging to a user
///
/// `user_id` is a plain reference to a `User::id`; there is no enforced
/// foreign-key integrity, so a todo may point at a user that no longer
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique id assigned by the store at creation time
    pub id: u64,
    /// Owning user's id (dangling references permitted)
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub done: bool,
}
