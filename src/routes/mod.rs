pub mod health;
pub mod todos;
pub mod users;

pub use health::health_check;
pub use todos::{create_todo, list_todos, remove_todo, toggle_todo};
pub use users::{create_user, list_users};
