use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::client::BackendError;

#[derive(Debug)]
pub enum ApiError {
    /// The backend call failed; `message` is the fixed localized text for the resource.
    Upstream {
        status: StatusCode,
        message: String,
        source: BackendError,
    },
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Upstream {
                status,
                message,
                source,
            } => {
                tracing::error!("{}: {}", message, source);
                (status, message)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
