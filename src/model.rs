//! Todo domain model and collection schema

use serde::{Deserialize, Serialize};

/// A persisted todo document
///
/// `id` is assigned by the store on creation and never changes afterwards.
/// On the wire it appears under the document field name `_id` as the
/// 24-character hex form of the document's ObjectId.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub done: bool,
}

/// Write payload for create and update requests
///
/// Both fields deserialize as optional so that an incomplete payload reaches
/// the store and is rejected by its schema validation, not by the JSON
/// extractor. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoDraft {
    pub title: Option<String>,
    pub done: Option<bool>,
}

impl TodoDraft {
    /// Check the draft against the collection schema
    ///
    /// `title` must be present and non-empty; `done` must be present
    /// (`false` is a valid value). Returns the validated field values, or a
    /// [`ValidationError`] naming every missing path in schema order.
    pub fn validate(&self) -> Result<(&str, bool), ValidationError> {
        let title = self.title.as_deref().filter(|title| !title.is_empty());

        let mut missing = Vec::new();
        if title.is_none() {
            missing.push("title");
        }
        if self.done.is_none() {
            missing.push("done");
        }

        match (title, self.done) {
            (Some(title), Some(done)) => Ok((title, done)),
            _ => Err(ValidationError::required(&missing)),
        }
    }
}

/// Schema rejection raised by the store on create and update
///
/// The message is the store's raw validation failure, e.g.
/// ``Todo validation failed: done: Path `done` is required.``
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    fn required(paths: &[&str]) -> Self {
        let failures: Vec<String> = paths
            .iter()
            .map(|path| format!("{path}: Path `{path}` is required."))
            .collect();
        Self {
            message: format!("Todo validation failed: {}", failures.join(", ")),
        }
    }
}
