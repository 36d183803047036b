//! The stored message record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored message: what the user sent, what the bot answered, and when
/// the record was created.
///
/// `id` is assigned by the store and never changes. `timestamp` is set once
/// at creation and survives updates; only `user_message` and `bot_response`
/// are mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}
