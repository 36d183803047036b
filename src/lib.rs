//! # Chatlog - message-logging backend
//!
//! A small HTTP service that stores chat messages alongside a generated
//! bot response and a creation timestamp.
//!
//! Chatlog provides:
//! - A single `Message` record type with SQLite-backed storage
//! - Four CRUD endpoints over `/messages/`
//! - A pluggable response generator (currently a plain echo)

pub mod bot;
pub mod config;
pub mod message;
pub mod server;
pub mod storage;

// Re-exports for convenient access
pub use message::Message;
pub use storage::SqliteStore;

/// Result type alias for Chatlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Chatlog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Message not found: {0}")]
    MessageNotFound(i64),
}
