use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::AllocationRequest;
use super::service::AllocationService;

/// Malformed request payload.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid allocation payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes an allocation payload. An empty body or a JSON `null` is an empty request.
pub fn parse_request(body: &[u8]) -> Result<AllocationRequest, InputError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AllocationRequest::default());
    }

    let request: Option<AllocationRequest> = serde_json::from_slice(body)?;
    Ok(request.unwrap_or_default())
}

/// Router builder exposing the allocation endpoint.
pub fn allocation_router(service: Arc<AllocationService>) -> Router {
    Router::new()
        .route("/api/assign", post(assign_handler))
        .with_state(service)
}

pub(crate) async fn assign_handler(
    State(service): State<Arc<AllocationService>>,
    body: Bytes,
) -> Response {
    match parse_request(&body) {
        Ok(request) => {
            let result = service.allocate_request(request);
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected allocation payload");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
