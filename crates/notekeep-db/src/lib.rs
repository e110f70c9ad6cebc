//! # notekeep-db
//!
//! PostgreSQL document store layer for notekeep.
//!
//! This crate provides:
//! - Connection pool management and liveness checks
//! - The JSON-backed notes collection ([`PgNoteRepository`])
//! - The connected/disconnected [`StorageGateway`] handed to request handlers
//!
//! ## Example
//!
//! ```rust,ignore
//! use notekeep_db::{PoolConfig, StorageGateway};
//!
//! let gateway = StorageGateway::connect("postgres://localhost/notekeep", PoolConfig::default()).await;
//! if let Some(notes) = gateway.collection() {
//!     let note = notes.insert(serde_json::json!("buy milk")).await?;
//!     println!("Created note: {}", note.id);
//! }
//! ```
pub mod gateway;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod notes;
pub mod pool;

// Test fixtures for integration tests
pub mod test_fixtures;

// Re-export core types
pub use notekeep_core::*;

pub use gateway::{NoteCollection, StorageGateway};
pub use notes::PgNoteRepository;
pub use pool::{create_pool_with_config, ping, PoolConfig};

/// Run pending migrations.
pub async fn migrate(pool: &sqlx::PgPool) -> Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
    Ok(())
}
