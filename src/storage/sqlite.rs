//! SQLite storage implementation

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;
use crate::message::Message;

/// SQLite-backed storage for message records.
///
/// One store instance owns one connection. Request handlers open a store
/// scoped to the request and drop it when they finish, so no connection
/// outlives the request that opened it.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Insert a new message; the store assigns a fresh id.
    pub fn insert(
        &self,
        user_message: &str,
        bot_response: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Message> {
        self.conn.execute(
            "INSERT INTO messages (user_message, bot_response, timestamp) VALUES (?1, ?2, ?3)",
            params![user_message, bot_response, timestamp],
        )?;

        Ok(Message {
            id: self.conn.last_insert_rowid(),
            user_message: user_message.to_string(),
            bot_response: bot_response.to_string(),
            timestamp,
        })
    }

    /// List messages in insertion order, skipping `skip` records and
    /// returning at most `limit`.
    ///
    /// Out-of-range values do not error: a `skip` past the end yields an
    /// empty list, and negative values fall through to SQLite's own
    /// OFFSET/LIMIT handling (negative limit means no limit).
    pub fn list(&self, skip: i64, limit: i64) -> Result<Vec<Message>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_message, bot_response, timestamp FROM messages
             ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let messages = stmt
            .query_map(params![limit, skip], |row| self.row_to_message(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(messages)
    }

    /// Point lookup by id
    pub fn get_by_id(&self, id: i64) -> Result<Option<Message>> {
        self.conn
            .query_row(
                "SELECT id, user_message, bot_response, timestamp FROM messages WHERE id = ?1",
                [id],
                |row| self.row_to_message(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Overwrite the text fields of an existing message.
    ///
    /// `id` and `timestamp` are left untouched. Returns the updated record,
    /// or `None` if no record has the given id.
    pub fn update(
        &self,
        id: i64,
        user_message: &str,
        bot_response: &str,
    ) -> Result<Option<Message>> {
        let changed = self.conn.execute(
            "UPDATE messages SET user_message = ?2, bot_response = ?3 WHERE id = ?1",
            params![id, user_message, bot_response],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        self.get_by_id(id)
    }

    /// Delete a message by id. Returns whether a record was removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM messages WHERE id = ?1", [id])?;
        Ok(removed > 0)
    }

    /// Count all messages
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a Message
    fn row_to_message(&self, row: &rusqlite::Row) -> rusqlite::Result<Message> {
        Ok(Message {
            id: row.get(0)?,
            user_message: row.get(1)?,
            bot_response: row.get(2)?,
            timestamp: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_echo(store: &SqliteStore, text: &str) -> Message {
        store.insert(text, text, Utc::now()).unwrap()
    }

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let store = SqliteStore::open_in_memory().unwrap();

        let first = insert_echo(&store, "Hello");
        let second = insert_echo(&store, "How are you?");

        assert_eq!(first.user_message, "Hello");
        assert_eq!(first.bot_response, "Hello");
        assert_ne!(first.id, second.id);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_get_by_id_round_trips_timestamp() {
        let store = SqliteStore::open_in_memory().unwrap();

        let inserted = insert_echo(&store, "Hello");
        let fetched = store.get_by_id(inserted.id).unwrap().unwrap();

        assert_eq!(fetched, inserted);
    }

    #[test]
    fn test_get_by_id_missing() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get_by_id(12345).unwrap().is_none());
    }

    #[test]
    fn test_list_insertion_order_with_skip_and_limit() {
        let store = SqliteStore::open_in_memory().unwrap();

        for i in 0..5 {
            insert_echo(&store, &format!("Message {}", i));
        }

        let all = store.list(0, 100).unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].user_message, "Message 0");
        assert_eq!(all[4].user_message, "Message 4");

        let middle = store.list(1, 2).unwrap();
        assert_eq!(middle.len(), 2);
        assert_eq!(middle[0].user_message, "Message 1");
        assert_eq!(middle[1].user_message, "Message 2");
    }

    #[test]
    fn test_list_skip_past_end_is_empty() {
        let store = SqliteStore::open_in_memory().unwrap();

        insert_echo(&store, "only one");

        assert!(store.list(10, 100).unwrap().is_empty());
    }

    #[test]
    fn test_list_permissive_bounds() {
        let store = SqliteStore::open_in_memory().unwrap();

        insert_echo(&store, "a");
        insert_echo(&store, "b");

        // zero limit yields nothing, negative limit yields everything
        assert!(store.list(0, 0).unwrap().is_empty());
        assert_eq!(store.list(0, -1).unwrap().len(), 2);
    }

    #[test]
    fn test_update_preserves_id_and_timestamp() {
        let store = SqliteStore::open_in_memory().unwrap();

        let original = insert_echo(&store, "Hello");
        let updated = store
            .update(original.id, "Updated", "Updated")
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.timestamp, original.timestamp);
        assert_eq!(updated.user_message, "Updated");
        assert_eq!(updated.bot_response, "Updated");
    }

    #[test]
    fn test_update_missing_returns_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.update(12345, "x", "x").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let store = SqliteStore::open_in_memory().unwrap();

        let message = insert_echo(&store, "Hello");

        assert!(store.delete(message.id).unwrap());
        assert_eq!(store.count().unwrap(), 0);
        // second delete of the same id finds nothing
        assert!(!store.delete(message.id).unwrap());
    }

    #[test]
    fn test_create_and_delete_loop_drains_store() {
        let store = SqliteStore::open_in_memory().unwrap();

        for i in 0..100 {
            insert_echo(&store, &format!("Message {}", i));
            assert_eq!(store.count().unwrap(), i + 1);
        }

        for i in 0..100 {
            let first = store.list(0, 1).unwrap().remove(0);
            assert!(store.delete(first.id).unwrap());
            assert_eq!(store.count().unwrap(), 99 - i);
        }

        assert!(store.list(0, 100).unwrap().is_empty());
    }
}
