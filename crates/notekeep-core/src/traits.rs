//! Core traits for notekeep abstractions.
//!
//! These traits define the interfaces that storage backends must satisfy,
//! enabling pluggable backends and testability.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::Result;
use crate::models::NoteDocument;

/// Repository over the single logical collection of notes.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Round-trip liveness check against the store.
    async fn ping(&self) -> Result<()>;

    /// Insert a new document holding only `content`.
    ///
    /// The store assigns the identifier. Implementations re-read the stored
    /// document by that identifier and return what the store holds.
    async fn insert(&self, content: JsonValue) -> Result<NoteDocument>;

    /// Look up a single document by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<NoteDocument>>;

    /// Every document in the collection, in store order.
    async fn list_all(&self) -> Result<Vec<NoteDocument>>;
}
