use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: i64,
}

// GET /health - liveness probe, reports whether the store answers
pub async fn health_check(State(pool): State<SqlitePool>) -> (StatusCode, Json<HealthResponse>) {
    let status = match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => "ok",
        Err(_) => "degraded",
    };

    let response = HealthResponse {
        status: status.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
