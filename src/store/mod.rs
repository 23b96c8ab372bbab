pub mod todo;
pub mod user;

pub use todo::TodoStore;
pub use user::UserStore;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::UserWithTodos;

/// Shared handle to the store (Arc-wrapped for sharing across handlers)
pub type SharedStore = Arc<RwLock<Store>>;

/// Process-wide state: both collections behind one lock
///
/// Keeping the two stores together means a single read acquisition yields
/// a consistent snapshot for the aggregation view.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: UserStore,
    pub todos: TodoStore,
}

impl Store {
    /// Create a store with the fixed startup records for both collections
    pub fn seeded() -> Self {
        Self {
            users: UserStore::seeded(),
            todos: TodoStore::seeded(),
        }
    }

    /// Wrap a seeded store in the shared handle used by the handlers
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::seeded()))
    }

    /// Build the users-with-todos aggregation view
    ///
    /// Attaches each user's todos (in todo store order) and returns the
    /// users in reverse creation order, last-created first. This reversal
    /// is a presentation rule of the aggregate endpoint only; `UserStore`
    /// itself stays insertion-ordered. The view is assembled from clones
    /// and never written back onto the entities.
    pub fn users_with_todos(&self) -> Vec<UserWithTodos> {
        self.users
            .list()
            .into_iter()
            .map(|user| {
                let todos = self.todos.list(Some(user.id));
                UserWithTodos { user, todos }
            })
            .rev()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_with_todos_reverses_user_order() {
        let store = Store::seeded();

        let views = store.users_with_todos();
        assert_eq!(views.len(), 2);

        // Bob (last created) comes first
        assert_eq!(views[0].user.name, "Bob");
        assert_eq!(
            views[0].todos.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 3]
        );

        assert_eq!(views[1].user.name, "Alice");
        assert_eq!(
            views[1].todos.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn test_users_with_todos_leaves_stores_untouched() {
        let mut store = Store::seeded();

        let _ = store.users_with_todos();
        let _ = store.users_with_todos();

        // Repeated aggregation neither mutates nor duplicates anything
        assert_eq!(store.users.len(), 2);
        assert_eq!(store.todos.len(), 3);
        assert_eq!(store.users.list()[1].name, "Bob");

        // A user without todos still shows up, with an empty list
        let carol = store.users.create("Carol".to_string());
        let views = store.users_with_todos();
        assert_eq!(views[0].user, carol);
        assert!(views[0].todos.is_empty());
    }
}
