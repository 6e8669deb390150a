//! MongoDB-backed todo store

use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use super::{parse_object_id, StoreError, StoreResult, TodoStore};
use crate::config::Config;
use crate::model::{Todo, TodoDraft};

/// Name of the backing collection
const COLLECTION: &str = "todos";

/// Database used when the connection string does not name one
const DEFAULT_DATABASE: &str = "todo-tdd";

/// [`TodoStore`] backed by a single MongoDB collection
///
/// Documents are read and written as raw BSON so that schema enforcement
/// stays in this layer. A persisted document that no longer carries the
/// schema fields surfaces as [`StoreError::Corrupt`] rather than panicking
/// a handler.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Build a store from the configured connection string
    ///
    /// The driver connects lazily, so this only fails on an unparsable URI.
    /// Use [`MongoStore::ping`] to probe the deployment.
    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.store_uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        let collection = database.collection::<Document>(COLLECTION);
        Ok(Self {
            database,
            collection,
        })
    }

    /// Round-trip a `ping` command to verify the deployment is reachable
    pub async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

impl TodoStore for MongoStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let mut cursor = self.collection.find(doc! {}).await?;
        let mut todos = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            todos.push(read_todo(&document)?);
        }
        Ok(todos)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        let id = parse_object_id(id)?;
        match self.collection.find_one(doc! { "_id": id }).await? {
            Some(document) => Ok(Some(read_todo(&document)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, draft: &TodoDraft) -> StoreResult<Todo> {
        let (title, done) = draft.validate()?;
        let result = self
            .collection
            .insert_one(doc! { "title": title, "done": done })
            .await?;
        let id = match result.inserted_id {
            Bson::ObjectId(id) => id,
            other => {
                return Err(StoreError::Corrupt(format!(
                    "store assigned a non-ObjectId document id: {other}"
                )))
            }
        };
        Ok(Todo {
            id: id.to_hex(),
            title: title.to_string(),
            done,
        })
    }

    async fn replace_by_id(&self, id: &str, draft: &TodoDraft) -> StoreResult<Option<Todo>> {
        let id = parse_object_id(id)?;
        let (title, done) = draft.validate()?;
        let replaced = self
            .collection
            .find_one_and_replace(doc! { "_id": id }, doc! { "title": title, "done": done })
            .return_document(ReturnDocument::After)
            .await?;
        match replaced {
            Some(document) => Ok(Some(read_todo(&document)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        let id = parse_object_id(id)?;
        match self.collection.find_one_and_delete(doc! { "_id": id }).await? {
            Some(document) => Ok(Some(read_todo(&document)?)),
            None => Ok(None),
        }
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Map a raw collection document onto the domain model
fn read_todo(document: &Document) -> StoreResult<Todo> {
    let id = document
        .get_object_id("_id")
        .map_err(|_| StoreError::Corrupt("missing `_id` in todos document".to_string()))?;
    let title = document
        .get_str("title")
        .map_err(|_| StoreError::Corrupt("invalid `title` in todos document".to_string()))?;
    let done = document
        .get_bool("done")
        .map_err(|_| StoreError::Corrupt("invalid `done` in todos document".to_string()))?;
    Ok(Todo {
        id: id.to_hex(),
        title: title.to_string(),
        done,
    })
}
