//! In-memory note repository for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use notekeep_db::mock::{FailureMode, MemoryNoteRepository};
//! use notekeep_db::StorageGateway;
//!
//! let repo = MemoryNoteRepository::new();
//! let gateway = StorageGateway::from_repository(repo.clone());
//!
//! repo.set_failure(FailureMode::Operation);
//! assert!(gateway.collection().unwrap().list_all().await.is_err());
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use notekeep_core::{Error, NoteDocument, NoteRepository, Result};

/// How the mock store should fail, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    #[default]
    None,
    /// The store rejects every operation (`Error::Database`).
    Operation,
    /// Operations fail with a non-store error (`Error::Internal`).
    Unexpected,
}

#[derive(Debug, Default)]
struct MemoryState {
    documents: Vec<NoteDocument>,
    failure: FailureMode,
}

/// Note repository backed by a vector, with failure injection.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent operations fail in the given way.
    pub fn set_failure(&self, failure: FailureMode) {
        self.lock().failure = failure;
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.lock().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A poisoned lock only means another test thread panicked mid-write.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check(state: &MemoryState) -> Result<()> {
        match state.failure {
            FailureMode::None => Ok(()),
            FailureMode::Operation => Err(Error::Database(sqlx::Error::Protocol(
                "mock store rejected the operation".to_string(),
            ))),
            FailureMode::Unexpected => Err(Error::Internal("mock store is broken".to_string())),
        }
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn ping(&self) -> Result<()> {
        Self::check(&self.lock())
    }

    async fn insert(&self, content: JsonValue) -> Result<NoteDocument> {
        let id = {
            let mut state = self.lock();
            Self::check(&state)?;
            let id = Uuid::new_v4();
            state.documents.push(NoteDocument { id, content });
            id
        };

        self.find_by_id(id)
            .await?
            .ok_or_else(|| Error::Internal(format!("inserted note {} could not be read back", id)))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<NoteDocument>> {
        let state = self.lock();
        Self::check(&state)?;
        Ok(state.documents.iter().find(|doc| doc.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<NoteDocument>> {
        let state = self.lock();
        Self::check(&state)?;
        Ok(state.documents.clone())
    }
}
