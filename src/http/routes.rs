//! HTTP route definitions

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::app::AppState;
use crate::http::extract::{parse_body, parse_id, INVALID_DATA, INVALID_ID};
use crate::http::static_files::static_fallback;
use crate::store::{InventoryItem, Record, StoreError, Supplier};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(collection_routes::<InventoryItem>("/api/inventory"))
        .merge(collection_routes::<Supplier>("/api/suppliers"))
        .fallback(static_fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CRUD routes for one collection mounted at `base`.
///
/// Methods a path does not handle fall through to the static fallback, so a
/// wrong method yields 404 rather than 405.
fn collection_routes<R: Record>(base: &str) -> Router<AppState> {
    Router::new()
        .route(
            base,
            get(list_records::<R>)
                .post(create_record::<R>)
                .fallback(static_fallback),
        )
        .route(
            &format!("{}/", base),
            put(reject_missing_id)
                .delete(reject_missing_id)
                .fallback(static_fallback),
        )
        .route(
            &format!("{}/:id", base),
            put(update_record::<R>)
                .delete(delete_record::<R>)
                .fallback(static_fallback),
        )
}

// ============================================================================
// Collection endpoints
// ============================================================================

#[derive(Serialize)]
struct CreatedResponse {
    id: i64,
}

#[derive(Serialize)]
struct EmptyResponse {}

async fn list_records<R: Record>(State(state): State<AppState>) -> Result<Json<Vec<R>>, AppError> {
    let records = state.db.collection::<R>().list().await?;
    Ok(Json(records))
}

async fn create_record<R: Record>(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let fields: R::Patch = parse_body(&body)?;
    let new = R::complete(fields).ok_or_else(|| AppError::BadRequest(INVALID_DATA.to_string()))?;

    let id = state.db.collection::<R>().create(new).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

async fn update_record<R: Record>(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<EmptyResponse>, AppError> {
    // Id is checked before the body is looked at
    let id = path_id(raw_id)?;
    let patch: R::Patch = parse_body(&body)?;

    let found = state.db.collection::<R>().update(id, patch).await?;
    if !found {
        return Err(AppError::NotFound("not found".to_string()));
    }

    Ok(Json(EmptyResponse {}))
}

async fn delete_record<R: Record>(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<EmptyResponse>, AppError> {
    let id = path_id(raw_id)?;
    state.db.collection::<R>().delete(id).await?;
    Ok(Json(EmptyResponse {}))
}

/// Segments axum cannot decode (e.g. `%FF`) are invalid ids too
fn path_id(raw_id: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    let Path(raw_id) = raw_id.map_err(|_| AppError::BadRequest(INVALID_ID.to_string()))?;
    parse_id(&raw_id)
}

/// `/api/<collection>/` with nothing after the slash
async fn reject_missing_id() -> AppError {
    AppError::BadRequest(INVALID_ID.to_string())
}

// ============================================================================
// Error handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyPatch => AppError::BadRequest(INVALID_DATA.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(detail) => {
                // Storage detail stays in the log
                error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}
