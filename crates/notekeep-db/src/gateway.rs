//! Storage gateway: the process-wide handle to the notes collection.
//!
//! The gateway is built once at startup. If the store cannot be reached the
//! process keeps running in a degraded, disconnected state and every
//! operation that needs the store reports [`Error::NotConnected`].

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value as JsonValue;
use tracing::{error, info};
use uuid::Uuid;

use notekeep_core::{Error, Note, NoteRepository, Result, NOTES_COLLECTION};

use crate::notes::PgNoteRepository;
use crate::pool::{create_pool_with_config, PoolConfig};

/// Handle to the logical notes collection.
///
/// Every document leaving through this handle has its identifier converted
/// to a plain string.
#[derive(Clone)]
pub struct NoteCollection {
    repo: Arc<dyn NoteRepository>,
}

impl NoteCollection {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    /// Create a note from client-supplied content.
    pub async fn insert(&self, content: JsonValue) -> Result<Note> {
        let doc = self.repo.insert(content).await?;
        info!(
            subsystem = "database",
            component = "gateway",
            op = "insert",
            note_id = %doc.id,
            "Note created"
        );
        Ok(doc.into())
    }

    /// Every note in the collection, in whatever order the store yields.
    pub async fn list_all(&self) -> Result<Vec<Note>> {
        let docs = self.repo.list_all().await?;
        Ok(docs.into_iter().map(Note::from).collect())
    }

    /// Direct lookup by the string identifier handed out to clients.
    pub async fn find(&self, id: &str) -> Result<Option<Note>> {
        let id = Uuid::parse_str(id)
            .map_err(|e| Error::InvalidInput(format!("invalid note id '{}': {}", id, e)))?;
        Ok(self.repo.find_by_id(id).await?.map(Note::from))
    }
}

/// Connection lifecycle state of the document store.
#[derive(Clone)]
pub enum StorageGateway {
    Connected(NoteCollection),
    Disconnected,
}

impl StorageGateway {
    /// Connect to the store, check liveness, and prepare the collection.
    ///
    /// Never fails: any error is logged and yields [`StorageGateway::Disconnected`].
    ///
    /// With the default `migrations` feature the `notes` table is created or
    /// upgraded here. Without it the schema must already exist.
    pub async fn connect(database_url: &str, config: PoolConfig) -> Self {
        let start = Instant::now();
        match Self::try_connect(database_url, config).await {
            Ok(repo) => {
                info!(
                    subsystem = "database",
                    component = "gateway",
                    op = "connect",
                    collection = NOTES_COLLECTION,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Connected to document store"
                );
                Self::from_repository(repo)
            }
            Err(e) => {
                error!(
                    subsystem = "database",
                    component = "gateway",
                    op = "connect",
                    error = %e,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Could not connect to document store, continuing without database"
                );
                Self::Disconnected
            }
        }
    }

    async fn try_connect(database_url: &str, config: PoolConfig) -> Result<PgNoteRepository> {
        let repo = PgNoteRepository::new(create_pool_with_config(database_url, config).await?);
        repo.ping().await?;

        #[cfg(feature = "migrations")]
        crate::migrate(repo.pool()).await?;

        Ok(repo)
    }

    /// Wrap an already-connected repository.
    pub fn from_repository(repo: impl NoteRepository + 'static) -> Self {
        Self::Connected(NoteCollection::new(Arc::new(repo)))
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// The collection handle, if connected.
    pub fn collection(&self) -> Option<&NoteCollection> {
        match self {
            Self::Connected(collection) => Some(collection),
            Self::Disconnected => None,
        }
    }

    /// Like [`collection`](Self::collection), but as a `Result`.
    pub fn require_collection(&self) -> Result<&NoteCollection> {
        self.collection().ok_or(Error::NotConnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FailureMode, MemoryNoteRepository};
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_returns_note_with_string_id() {
        let repo = MemoryNoteRepository::new();
        let gateway = StorageGateway::from_repository(repo.clone());
        let notes = gateway.require_collection().unwrap();

        let note = notes.insert(json!("buy milk")).await.unwrap();

        assert!(Uuid::parse_str(&note.id).is_ok());
        assert_eq!(note.content, json!("buy milk"));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_converts_every_document() {
        let gateway = StorageGateway::from_repository(MemoryNoteRepository::new());
        let notes = gateway.require_collection().unwrap();

        let first = notes.insert(json!("one")).await.unwrap();
        let second = notes.insert(json!({"two": 2})).await.unwrap();

        let listed = notes.list_all().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&first));
        assert!(listed.contains(&second));
    }

    #[tokio::test]
    async fn test_find_resolves_returned_id() {
        let gateway = StorageGateway::from_repository(MemoryNoteRepository::new());
        let notes = gateway.require_collection().unwrap();

        let created = notes.insert(json!([1, 2, 3])).await.unwrap();
        let found = notes.find(&created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_rejects_malformed_id() {
        let gateway = StorageGateway::from_repository(MemoryNoteRepository::new());
        let err = gateway
            .require_collection()
            .unwrap()
            .find("not-a-uuid")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let repo = MemoryNoteRepository::new();
        let gateway = StorageGateway::from_repository(repo.clone());
        let notes = gateway.require_collection().unwrap();

        repo.set_failure(FailureMode::Operation);
        assert!(notes.insert(json!("x")).await.unwrap_err().is_operation_failure());
        assert!(notes.list_all().await.unwrap_err().is_operation_failure());
    }

    #[test]
    fn test_disconnected_gateway_has_no_collection() {
        let gateway = StorageGateway::Disconnected;

        assert!(!gateway.is_connected());
        assert!(gateway.collection().is_none());
        assert!(matches!(
            gateway.require_collection(),
            Err(Error::NotConnected)
        ));
    }

    #[tokio::test]
    async fn test_connect_with_invalid_url_is_disconnected() {
        let gateway = StorageGateway::connect("not a connection string", PoolConfig::default()).await;
        assert!(!gateway.is_connected());
    }
}
