//! Persistent storage for message records

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;
