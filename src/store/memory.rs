//! In-memory todo store used by the test suites

use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{parse_object_id, StoreError, StoreResult, TodoStore};
use crate::model::{Todo, TodoDraft};

/// Insertion-ordered [`TodoStore`] double
///
/// Follows the same contract as the MongoDB store, including id casting and
/// schema validation. [`MemoryStore::failing`] builds a double whose every
/// operation reports a backend failure, for exercising the error channel.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose operations all fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    fn check_failure(&self) -> StoreResult<()> {
        match &self.failure {
            Some(message) => Err(StoreError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl TodoStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        self.check_failure()?;
        Ok(self.todos.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        self.check_failure()?;
        let id = parse_object_id(id)?.to_hex();
        Ok(self
            .todos
            .read()
            .await
            .iter()
            .find(|todo| todo.id == id)
            .cloned())
    }

    async fn insert(&self, draft: &TodoDraft) -> StoreResult<Todo> {
        self.check_failure()?;
        let (title, done) = draft.validate()?;
        let todo = Todo {
            id: ObjectId::new().to_hex(),
            title: title.to_string(),
            done,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn replace_by_id(&self, id: &str, draft: &TodoDraft) -> StoreResult<Option<Todo>> {
        self.check_failure()?;
        let id = parse_object_id(id)?.to_hex();
        let (title, done) = draft.validate()?;
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.title = title.to_string();
                todo.done = done;
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        self.check_failure()?;
        let id = parse_object_id(id)?.to_hex();
        let mut todos = self.todos.write().await;
        match todos.iter().position(|todo| todo.id == id) {
            Some(index) => Ok(Some(todos.remove(index))),
            None => Ok(None),
        }
    }
}
