//! Generic CRUD plumbing shared by the three entity resources.
//!
//! Each entity describes itself through [`Resource`]: its names, row and
//! body types, and the storage operations it delegates to. The five axum
//! handlers and the verb/path table are written once here and instantiated
//! per entity by [`routes`].

use std::future::Future;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};
use sqlx::sqlite::SqlitePool;

use crate::error::ApiError;

/// Path prefix every resource is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Per-entity description driving the generic handlers.
pub trait Resource: Send + Sized + 'static {
    /// Plural collection name, also the URL segment and list envelope key.
    const COLLECTION: &'static str;
    /// Singular name wrapping single-item response bodies.
    const SINGULAR: &'static str;

    type Row: Serialize + Send + 'static;
    type CreateBody: DeserializeOwned + Send + 'static;
    type UpdateBody: DeserializeOwned + Send + 'static;

    fn list(pool: &SqlitePool)
    -> impl Future<Output = Result<Vec<Self::Row>, sqlx::Error>> + Send;

    fn insert(
        pool: &SqlitePool,
        body: Self::CreateBody,
        now: &str,
    ) -> impl Future<Output = Result<Self::Row, sqlx::Error>> + Send;

    fn fetch(
        pool: &SqlitePool,
        id: i64,
    ) -> impl Future<Output = Result<Option<Self::Row>, sqlx::Error>> + Send;

    fn update(
        pool: &SqlitePool,
        id: i64,
        body: Self::UpdateBody,
        now: &str,
    ) -> impl Future<Output = Result<Option<Self::Row>, sqlx::Error>> + Send;

    fn delete(
        pool: &SqlitePool,
        id: i64,
    ) -> impl Future<Output = Result<Option<Self::Row>, sqlx::Error>> + Send;

    /// Storage-assigned id of a row.
    fn id(row: &Self::Row) -> i64;

    /// Confirmation message for a successful delete, interpolating the
    /// entity's identifying fields.
    fn deleted_message(row: &Self::Row) -> String;

    /// `{ "<singular>": row }`
    fn wrap_one(row: &Self::Row) -> Value {
        let mut body = Map::new();
        body.insert(Self::SINGULAR.to_string(), json!(row));
        Value::Object(body)
    }

    /// `{ "<collection>": [rows] }`
    fn wrap_list(rows: &[Self::Row]) -> Value {
        let mut body = Map::new();
        body.insert(Self::COLLECTION.to_string(), json!(rows));
        Value::Object(body)
    }
}

/// Binds the conventional CRUD verb/path table for one resource.
pub fn routes<R: Resource>() -> Router<SqlitePool> {
    let collection = format!("/{}", R::COLLECTION);
    let member = format!("/{}/{{id}}", R::COLLECTION);

    Router::new()
        .route(&collection, get(index::<R>).post(create::<R>))
        .route(
            &member,
            get(show::<R>)
                .put(update::<R>)
                .patch(update::<R>)
                .delete(destroy::<R>),
        )
}

/// Server-assigned timestamp used for created_at/updated_at.
fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

// GET /{collection} - list every row, storage-default order
pub async fn index<R: Resource>(State(pool): State<SqlitePool>) -> Result<Json<Value>, ApiError> {
    let rows = R::list(&pool).await?;
    Ok(Json(R::wrap_list(&rows)))
}

// POST /{collection} - insert a row and point at the new resource
pub async fn create<R: Resource>(
    State(pool): State<SqlitePool>,
    Json(body): Json<R::CreateBody>,
) -> Result<Response, ApiError> {
    let row = R::insert(&pool, body, &now()).await.map_err(|err| {
        tracing::error!("failed to create {}: {}", R::SINGULAR, err);
        ApiError::from_create(err)
    })?;

    let location = format!("{API_PREFIX}/{}/{}", R::COLLECTION, R::id(&row));
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(R::wrap_one(&row)),
    )
        .into_response())
}

// GET /{collection}/{id} - fetch one row by exact id match
pub async fn show<R: Resource>(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let row = R::fetch(&pool, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(R::wrap_one(&row)))
}

// PUT/PATCH /{collection}/{id} - merge the patch into the stored row.
// Absent fields keep their values; updated_at always moves.
pub async fn update<R: Resource>(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(body): Json<R::UpdateBody>,
) -> Result<Json<Value>, ApiError> {
    let row = R::update(&pool, id, body, &now())
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(R::wrap_one(&row)))
}

// DELETE /{collection}/{id} - remove the row and confirm with a message
// built from the data it held
pub async fn destroy<R: Resource>(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let row = R::delete(&pool, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(json!({ "message": R::deleted_message(&row) })))
}
