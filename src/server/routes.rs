use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bot;
use crate::message::Message;
use crate::server::AppState;
use crate::storage::SqliteStore;

#[derive(Deserialize)]
pub struct MessageCreate {
    pub user_message: String,
}

#[derive(Deserialize)]
pub struct MessageUpdate {
    pub user_message: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Wire form of a stored message
#[derive(Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            user_message: message.user_message,
            bot_response: message.bot_response,
            timestamp: message.timestamp,
        }
    }
}

/// Fixed-shape detail payload, used for 404s and the delete confirmation
#[derive(Serialize)]
pub struct Detail {
    pub detail: String,
}

type ErrorReply = (StatusCode, Json<Detail>);

/// Map a domain error to its HTTP reply. "Not found" is the only error the
/// API reports with a fixed detail string; everything else is a 500 carrying
/// the error text.
fn error_reply(err: crate::Error) -> ErrorReply {
    match err {
        crate::Error::MessageNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(Detail {
                detail: "Message not found".to_string(),
            }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Detail {
                detail: other.to_string(),
            }),
        ),
    }
}

/// Open a store scoped to the current request
fn open_store(state: &AppState) -> Result<SqliteStore, ErrorReply> {
    SqliteStore::open(&state.database_path).map_err(error_reply)
}

pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MessageCreate>,
) -> Result<Json<MessageResponse>, ErrorReply> {
    let store = open_store(&state)?;

    let bot_response = bot::respond(&payload.user_message);
    let message = store
        .insert(&payload.user_message, &bot_response, Utc::now())
        .map_err(error_reply)?;

    Ok(Json(message.into()))
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MessageResponse>>, ErrorReply> {
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(100);

    let store = open_store(&state)?;
    let messages = store.list(skip, limit).map_err(error_reply)?;

    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

pub async fn update_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<MessageUpdate>,
) -> Result<Json<MessageResponse>, ErrorReply> {
    let store = open_store(&state)?;

    let bot_response = bot::respond(&payload.user_message);
    let updated = store
        .update(id, &payload.user_message, &bot_response)
        .map_err(error_reply)?
        .ok_or(crate::Error::MessageNotFound(id))
        .map_err(error_reply)?;

    Ok(Json(updated.into()))
}

pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Detail>, ErrorReply> {
    let store = open_store(&state)?;

    if store.delete(id).map_err(error_reply)? {
        Ok(Json(Detail {
            detail: "Message deleted".to_string(),
        }))
    } else {
        Err(error_reply(crate::Error::MessageNotFound(id)))
    }
}
