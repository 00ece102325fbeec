use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::header::CONTENT_LENGTH,
    response::Response,
};
use http_body_util::LengthLimitError;
use std::error::Error as _;
use std::sync::Arc;

use crate::api::{error::ApiError, policy::ErrorPolicy};
use crate::client::has_dot_segments;
use crate::domain::Resource;
use crate::services::ProxyService;

const API_PREFIX: &str = "/api";

/// Catch-all for `/api/*` paths without a dedicated handler: relays the request
/// to the same path on the backend and returns the backend's reply unmodified.
pub async fn forward_to_backend(
    State(service): State<Arc<ProxyService>>,
    State(policy): State<ErrorPolicy>,
    req: Request,
) -> Result<Response, ApiError> {
    let (parts, body) = req.into_parts();

    let path = parts
        .uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(parts.uri.path());
    if has_dot_segments(path) {
        tracing::warn!("Refusing to forward dot-segment path {}", parts.uri.path());
        return Err(policy.invalid_path());
    }

    let limit = service.max_body_bytes();

    let declared_length = parts
        .headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    if declared_length.is_some_and(|length| length > limit) {
        return Err(policy.payload_too_large());
    }

    let body = to_bytes(body, limit).await.map_err(|e| {
        if e.source().is_some_and(|source| source.is::<LengthLimitError>()) {
            policy.payload_too_large()
        } else {
            tracing::warn!("Failed to read request body: {}", e);
            policy.unreadable_body()
        }
    })?;

    let forwarded = service
        .fetch_from_backend(path, parts.method, parts.uri.query(), parts.headers, body)
        .await
        .map_err(|e| policy.upstream(Resource::Passthrough, e))?;

    let mut response = Response::new(Body::from(forwarded.body));
    *response.status_mut() = forwarded.status;
    *response.headers_mut() = forwarded.headers;

    Ok(response)
}
