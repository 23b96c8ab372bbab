pub mod todo;
pub mod user;

pub use todo::Todo;
pub use user::{User, UserWithTodos};
