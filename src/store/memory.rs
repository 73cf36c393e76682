use super::TodoStore;
use crate::error::{Result, TodozError};
use crate::model::Todo;
use uuid::Uuid;

/// In-memory todo storage.
///
/// Records are kept in a `Vec` in insertion order, which is the order
/// guarantee the projection engine builds on. Single-threaded by design;
/// there is no locking discipline because there is no concurrent caller.
pub struct InMemoryStore {
    todos: Vec<Todo>,
    simulate_write_error: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            simulate_write_error: false,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl TodoStore for InMemoryStore {
    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        if self.simulate_write_error {
            return Err(TodozError::Store("Simulated write error".to_string()));
        }
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(existing) => *existing = todo.clone(),
            None => self.todos.push(todo.clone()),
        }
        Ok(())
    }

    fn get_todo(&self, id: &Uuid) -> Result<Todo> {
        self.todos
            .iter()
            .find(|t| t.id == *id)
            .cloned()
            .ok_or(TodozError::TodoNotFound(*id))
    }

    fn list_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn delete_todo(&mut self, id: &Uuid) -> Result<()> {
        let pos = self
            .todos
            .iter()
            .position(|t| t.id == *id)
            .ok_or(TodozError::TodoNotFound(*id))?;
        self.todos.remove(pos);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                let todo = Todo::new(&format!("Test Todo {}", i + 1)).unwrap();
                self.store.save_todo(&todo).unwrap();
            }
            self
        }

        pub fn with_todo(mut self, text: &str) -> Self {
            let todo = Todo::new(text).unwrap();
            self.store.save_todo(&todo).unwrap();
            self
        }

        pub fn with_done_todo(mut self, text: &str) -> Self {
            let mut todo = Todo::new(text).unwrap();
            todo.done = true;
            self.store.save_todo(&todo).unwrap();
            self
        }
    }
}
