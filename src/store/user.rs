use crate::models::User;

/// In-memory owner of the user collection
///
/// Same id scheme as [`crate::store::TodoStore`]: current count + 1.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create a store holding the fixed startup records
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    name: "Alice".to_string(),
                },
                User {
                    id: 2,
                    name: "Bob".to_string(),
                },
            ],
        }
    }

    /// List all users in insertion order
    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Append a new user and return it
    pub fn create(&mut self, name: String) -> User {
        let user = User {
            id: self.users.len() as u64 + 1,
            name,
        };
        self.users.push(user.clone());

        user
    }

    /// Number of users currently held
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_returns_seed_users_in_order() {
        let store = UserStore::seeded();

        let users = store.list();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[1].name, "Bob");
    }

    #[test]
    fn test_create_assigns_count_based_id() {
        let mut store = UserStore::seeded();

        let user = store.create("Carol".to_string());
        assert_eq!(user.id, 3);
        assert_eq!(store.list().last().unwrap(), &user);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let mut store = UserStore::default();

        let user = store.create("Eve".to_string());
        assert_eq!(user.id, 1);
    }
}
