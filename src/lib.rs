//! Library crate for the Text Invaders backend, exposing modules for the
//! binary and integration tests.

use axum::{Router, routing::get};
use sqlx::sqlite::SqlitePool;

pub mod db;
pub mod error;
pub mod models;
pub mod resource;
pub mod routes;

/// Build the full application router: banner, health check, and the
/// versioned resource API, with the connection pool as shared state.
pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(|| async { "Text Invaders API - v1.0" }))
        .route("/health", get(routes::health::health_check))
        .nest(resource::API_PREFIX, routes::api_router())
        .with_state(pool)
}
