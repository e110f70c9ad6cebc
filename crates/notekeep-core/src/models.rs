//! Note data model.
//!
//! A note exists in two shapes: [`NoteDocument`] is what the store holds,
//! keyed by its native identifier, and [`Note`] is what crosses the HTTP
//! boundary, with the identifier rendered as a plain string under `_id`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Name of the logical collection notes are stored in.
pub const NOTES_COLLECTION: &str = "notes";

/// A note as persisted in the document store.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDocument {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// Client-supplied content, any JSON value.
    pub content: JsonValue,
}

/// A note as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: JsonValue,
}

impl From<NoteDocument> for Note {
    fn from(doc: NoteDocument) -> Self {
        Self {
            id: doc.id.to_string(),
            content: doc.content,
        }
    }
}

/// Validated body of a create-note request.
///
/// Only the presence of the `content` key is checked. Its value may be any
/// JSON value, including an empty string or `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateNoteRequest {
    pub content: JsonValue,
}

impl CreateNoteRequest {
    /// Parse a raw request body.
    ///
    /// Fails with [`Error::InvalidInput`] when the body is empty, is not
    /// valid JSON, is not a JSON object, or has no `content` key.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::InvalidInput("request body is empty".to_string()));
        }

        let value: JsonValue = serde_json::from_slice(body)
            .map_err(|e| Error::InvalidInput(format!("request body is not valid JSON: {}", e)))?;

        Self::from_value(value)
    }

    /// Build a request from an already-parsed JSON value.
    pub fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(mut map) => match map.remove("content") {
                Some(content) => Ok(Self { content }),
                None => Err(Error::InvalidInput("missing 'content' key".to_string())),
            },
            _ => Err(Error::InvalidInput(
                "request body must be a JSON object".to_string(),
            )),
        }
    }
}
