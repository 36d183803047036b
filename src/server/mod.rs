use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStore;

pub mod routes;

/// Server state
///
/// Holds only the database path; every request opens its own store scoped
/// to that request, so no connection is shared across handlers.
pub struct AppState {
    pub database_path: PathBuf,
}

/// Build the message CRUD router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/messages/",
            get(routes::list_messages).post(routes::create_message),
        )
        .route(
            "/messages/{id}/",
            put(routes::update_message).delete(routes::delete_message),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(port: u16, database_path: PathBuf) -> anyhow::Result<()> {
    // Create the database (and its schema) up front so a bad path fails at
    // startup instead of on the first request.
    SqliteStore::open(&database_path)?;

    let state = Arc::new(AppState { database_path });
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
