pub mod products;
pub mod publish;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::warn;

use vitrine_common::VitrineError;

/// Map a service error onto a response. Client faults become 4xx;
/// everything else is a 500 carrying the error message.
pub fn error_response(err: VitrineError) -> Response {
    let status = match err {
        VitrineError::NotFound(_) => StatusCode::NOT_FOUND,
        VitrineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        warn!(error = %err, "Request failed");
    }
    (status, Json(serde_json::json!({"error": err.to_string()}))).into_response()
}
