//! Note types

use serde::{Deserialize, Serialize};

use super::NoteError;

/// A persisted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Auto-incremented database ID
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}

/// Fields supplied when creating a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Build from possibly-missing fields. Empty strings are accepted.
    pub fn from_parts(title: Option<String>, content: Option<String>) -> Result<Self, NoteError> {
        Ok(Self {
            title: title.ok_or(NoteError::MissingField("title"))?,
            content: content.ok_or(NoteError::MissingField("content"))?,
        })
    }
}
