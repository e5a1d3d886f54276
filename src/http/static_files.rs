//! Static file fallback for paths outside the API

use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::AppState;
use crate::http::routes::AppError;

/// Serve `GET`/`HEAD` requests from the configured static directory; anything
/// else that reached here is an unknown route.
pub async fn static_fallback(State(state): State<AppState>, request: Request) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return AppError::NotFound("not found".to_string()).into_response();
    }

    match ServeDir::new(&state.config.static_dir).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
