use axum::Router;
use sqlx::sqlite::SqlitePool;

use crate::models::{Game, Play, Player};
use crate::resource;

pub mod games;
pub mod health;
pub mod players;
pub mod plays;

/// Compose the CRUD route tables for the three resources. Mounted under
/// the API prefix by the caller.
pub fn api_router() -> Router<SqlitePool> {
    resource::routes::<Player>()
        .merge(resource::routes::<Game>())
        .merge(resource::routes::<Play>())
}
