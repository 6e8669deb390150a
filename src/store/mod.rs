//! Todo record store
//!
//! The collection contract lives here; `mongo` implements it against a
//! MongoDB deployment and `memory` provides the in-memory double used by
//! the test suites.

#[cfg(any(test, feature = "test-utils"))]
mod memory;
mod mongo;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use std::future::Future;

use mongodb::bson::oid::ObjectId;

use crate::model::{Todo, TodoDraft, ValidationError};

/// Failure reported by a store operation
///
/// Absence of a document is not an error; by-id operations model it as
/// `Ok(None)`. Everything here is forwarded verbatim to the HTTP error
/// channel.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Write rejected by the collection schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Path identifier that cannot be cast to a document id
    #[error("Cast to ObjectId failed for value \"{0}\" at path \"_id\" for model \"Todo\"")]
    MalformedId(String),

    /// Persisted document that no longer matches the collection schema
    #[error("invalid todo document in store: {0}")]
    Corrupt(String),

    /// Failure reported by the backing store
    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Collection contract shared by the store implementations
///
/// Drafts are validated against the schema before any write; a draft that
/// fails validation never reaches the collection.
pub trait TodoStore: Send + Sync + 'static {
    /// Every document in the collection, in natural order
    fn list(&self) -> impl Future<Output = StoreResult<Vec<Todo>>> + Send;

    /// Look up one document by id
    fn find_by_id(&self, id: &str) -> impl Future<Output = StoreResult<Option<Todo>>> + Send;

    /// Validate the draft and insert it, returning the created document
    /// with its assigned id
    fn insert(&self, draft: &TodoDraft) -> impl Future<Output = StoreResult<Todo>> + Send;

    /// Validate the draft and replace the document's fields wholesale,
    /// returning the new values
    fn replace_by_id(
        &self,
        id: &str,
        draft: &TodoDraft,
    ) -> impl Future<Output = StoreResult<Option<Todo>>> + Send;

    /// Remove one document by id, returning the pre-deletion snapshot
    fn delete_by_id(&self, id: &str) -> impl Future<Output = StoreResult<Option<Todo>>> + Send;
}

/// Parse a path identifier into a document id
///
/// Malformed identifiers are a store-level cast failure, not a lookup miss.
fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_ids_parse() {
        assert!(parse_object_id("61d8a2336f554f35bed65344").is_ok());
    }

    #[test]
    fn malformed_id_reports_a_cast_failure() {
        let err = parse_object_id("not-an-id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cast to ObjectId failed for value \"not-an-id\" at path \"_id\" for model \"Todo\""
        );
    }

    #[test]
    fn validation_errors_pass_through_unchanged() {
        let draft = TodoDraft {
            title: Some("x".to_string()),
            done: None,
        };
        let err = StoreError::from(draft.validate().unwrap_err());
        assert_eq!(
            err.to_string(),
            "Todo validation failed: done: Path `done` is required."
        );
    }
}
