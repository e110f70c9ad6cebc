//! # notekeep-core
//!
//! Core types, traits, and abstractions for the notekeep service.
//!
//! This crate provides the note data model, request validation, the shared
//! error type, and the repository trait that storage backends implement.

pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
