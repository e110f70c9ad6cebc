//! Note repository implementation.
//!
//! Notes live in a single `notes` table used as a document collection: a
//! server-generated UUID key and a `JSON` `content` column.
//!
//! Content is bound as text and cast with `::json`. A `Json<T>` parameter is
//! declared as `jsonb`, which cannot hold `\u0000`.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use notekeep_core::{Error, NoteDocument, NoteRepository, Result};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    fn row_to_document(row: &PgRow) -> Result<NoteDocument> {
        let id: Uuid = row.try_get("id")?;
        let Json(content): Json<JsonValue> = row.try_get("content")?;
        Ok(NoteDocument { id, content })
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn ping(&self) -> Result<()> {
        crate::pool::ping(&self.pool).await
    }

    async fn insert(&self, content: JsonValue) -> Result<NoteDocument> {
        let text = serde_json::to_string(&content)?;
        let id: Uuid =
            sqlx::query_scalar("INSERT INTO notes (content) VALUES ($1::json) RETURNING id")
                .bind(text)
                .fetch_one(&self.pool)
                .await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "insert",
            note_id = %id,
            "Inserted note document"
        );

        self.find_by_id(id)
            .await?
            .ok_or_else(|| Error::Internal(format!("inserted note {} could not be read back", id)))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<NoteDocument>> {
        let row = sqlx::query("SELECT id, content FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_document).transpose()
    }

    async fn list_all(&self) -> Result<Vec<NoteDocument>> {
        let rows = sqlx::query("SELECT id, content FROM notes")
            .fetch_all(&self.pool)
            .await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "list_all",
            result_count = rows.len(),
            "Listed note documents"
        );

        rows.iter().map(Self::row_to_document).collect()
    }
}
