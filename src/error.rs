use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the resource handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The id in the path does not resolve to a row.
    #[error("Resource not found")]
    NotFound,
    /// The store rejected a create, typically a required column violation.
    /// The cause is logged server-side and never echoed to the caller.
    #[error("Unprocessable entity")]
    Unprocessable(#[source] sqlx::Error),
    /// Any other storage failure.
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Maps a failed insert to the create contract: constraint violations
    /// are the caller's fault (422), anything else is a server fault (500).
    pub fn from_create(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(_) => ApiError::Unprocessable(err),
            other => ApiError::Database(other),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(source) => {
                tracing::error!("database error: {}", source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
