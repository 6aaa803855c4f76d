//! Narration formatter HTTP server (Axum).
//!
//! Serves the upload form, accepts a transcript plus an output name and
//! returns the annotated DOCX as an attachment.

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use state::AppState;

/// Build the application router with the default configuration.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    let limit = state.config.server.max_upload_bytes;
    Router::new()
        .merge(routes::page_routes())
        .merge(routes::upload_routes())
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}
