use std::{collections::HashMap, sync::RwLock};

use super::errors::StorageError;
use crate::models::todo_model::Todo;

pub trait TodoStorage: Send + Sync {
    fn get_all(&self) -> Result<Vec<Todo>, StorageError>;
    fn get(&self, id: &str) -> Result<Todo, StorageError>;
    fn create(&self, todo: Todo) -> Result<(), StorageError>;
    /// Replace an existing todo, keyed by its id
    fn update(&self, todo: Todo) -> Result<(), StorageError>;
    fn delete(&self, id: &str) -> Result<(), StorageError>;
}

/// Process-local store, emptied on restart
#[derive(Default)]
pub struct MemoryStorage {
    todos: RwLock<HashMap<String, Todo>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStorage for MemoryStorage {
    fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        let todos = self.todos.read().map_err(|_| StorageError::LockPoisoned)?;

        Ok(todos.values().cloned().collect())
    }

    fn get(&self, id: &str) -> Result<Todo, StorageError> {
        let todos = self.todos.read().map_err(|_| StorageError::LockPoisoned)?;

        todos.get(id).cloned().ok_or(StorageError::NotFound)
    }

    fn create(&self, todo: Todo) -> Result<(), StorageError> {
        let mut todos = self.todos.write().map_err(|_| StorageError::LockPoisoned)?;

        todos.insert(todo.id.clone(), todo);
        Ok(())
    }

    fn update(&self, todo: Todo) -> Result<(), StorageError> {
        let mut todos = self.todos.write().map_err(|_| StorageError::LockPoisoned)?;

        match todos.get_mut(&todo.id) {
            Some(existing) => {
                *existing = todo;
                Ok(())
            }
            None => Err(StorageError::NotFound),
        }
    }

    fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut todos = self.todos.write().map_err(|_| StorageError::LockPoisoned)?;

        todos.remove(id).map(|_| ()).ok_or(StorageError::NotFound)
    }
}
