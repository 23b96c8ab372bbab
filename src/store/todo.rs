use crate::models::Todo;

/// In-memory owner of the todo collection
///
/// Insertion order is preserved; deletions never renumber the survivors.
/// Ids are assigned as current count + 1, which matches the observable
/// behavior this service replaces: after a deletion, a later create can
/// reuse an id still held by a surviving record.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Create a store holding the fixed startup records
    pub fn seeded() -> Self {
        Self {
            todos: vec![
                Todo {
                    id: 1,
                    user_id: 1,
                    title: "Comprar pão".to_string(),
                    done: false,
                },
                Todo {
                    id: 2,
                    user_id: 2,
                    title: "Estudar Nuxt".to_string(),
                    done: true,
                },
                Todo {
                    id: 3,
                    user_id: 2,
                    title: "Fazer Exercicios".to_string(),
                    done: false,
                },
            ],
        }
    }

    /// List todos in store order, optionally filtered by owning user
    ///
    /// A `user_id` that matches nothing yields an empty list, never an
    /// error.
    pub fn list(&self, user_id: Option<u64>) -> Vec<Todo> {
        match user_id {
            Some(user_id) => self
                .todos
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect(),
            None => self.todos.clone(),
        }
    }

    /// Append a new todo with `done = false` and return it
    pub fn create(&mut self, user_id: u64, title: String) -> Todo {
        let todo = Todo {
            id: self.todos.len() as u64 + 1,
            user_id,
            title,
            done: false,
        };
        self.todos.push(todo.clone());

        todo
    }

    /// Flip `done` on the first todo with the given id
    ///
    /// Returns the updated record, or `None` when no todo matches (the
    /// collection is left untouched).
    pub fn toggle(&mut self, id: u64) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.done = !todo.done;

        Some(todo.clone())
    }

    /// Remove the first todo with the given id
    ///
    /// Returns `true` when a record was removed, `false` when none matched.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.todos.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.todos.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Number of todos currently held
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
