// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, conversation_handler};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Chat endpoints plus the frontend in `static_dir`. Unknown paths get `index.html`.
pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    let static_dir = static_dir.as_ref();
    let frontend = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/api/chat", post(conversation_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
}
