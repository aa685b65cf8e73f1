//! Frontend Models
//!
//! Data structures matching the backend's todo entities.

use serde::{Deserialize, Serialize};

/// Backend-assigned row identifier
pub type RowId = i64;

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub rowid: RowId,
    pub task: String,
    pub complete: bool,
}

impl Item {
    pub fn new(rowid: RowId, task: impl Into<String>, complete: bool) -> Self {
        Self {
            rowid,
            task: task.into(),
            complete,
        }
    }

    /// Mutable fields of this item
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            task: self.task.clone(),
            complete: self.complete,
        }
    }

    /// Re-stamp confirmed fields with a known row id
    pub fn from_fields(rowid: RowId, fields: TaskFields) -> Self {
        Self {
            rowid,
            task: fields.task,
            complete: fields.complete,
        }
    }
}

/// Mutable part of an item.
///
/// Sent as the form body of create and update requests, and returned as the
/// update response entity (which need not echo the row id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    pub task: String,
    pub complete: bool,
}

impl TaskFields {
    /// A fresh, incomplete task
    pub fn new_task(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            complete: false,
        }
    }
}

/// Partial change to an item; `None` keeps the prior value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub task: Option<String>,
    pub complete: Option<bool>,
}

impl ItemPatch {
    pub fn task(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
            ..Default::default()
        }
    }

    pub fn complete(complete: bool) -> Self {
        Self {
            complete: Some(complete),
            ..Default::default()
        }
    }

    /// Merge over `item`, patch fields winning
    pub fn apply_to(&self, item: &Item) -> TaskFields {
        TaskFields {
            task: self.task.clone().unwrap_or_else(|| item.task.clone()),
            complete: self.complete.unwrap_or(item.complete),
        }
    }
}

/// `{ "entity": ... }` wrapper used by create/update responses
#[derive(Debug, Clone, Deserialize)]
pub struct EntityEnvelope<T> {
    pub entity: T,
}

/// `{ "message": ... }` body of backend error responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
