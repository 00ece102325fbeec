use axum::http::StatusCode;

use crate::client::BackendError;
use crate::config::AppConfig;
use crate::domain::{Locale, Resource};

use super::error::ApiError;

/// Deployment-wide rule for turning failures into responses.
///
/// Messages are fixed per resource and locale. By default every upstream
/// failure becomes a 500; with `propagate_upstream_status` the backend's own
/// error status is kept, timeouts become 504 and anything else 502.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPolicy {
    pub locale: Locale,
    pub propagate_upstream_status: bool,
}

impl ErrorPolicy {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            locale: config.locale,
            propagate_upstream_status: config.propagate_upstream_status,
        }
    }

    pub fn upstream(&self, resource: Resource, err: BackendError) -> ApiError {
        let status = if self.propagate_upstream_status {
            upstream_status(&err)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        ApiError::Upstream {
            status,
            message: resource.failure_message(self.locale).to_string(),
            source: err,
        }
    }

    pub fn invalid_date(&self, param: &str) -> ApiError {
        ApiError::BadRequest(self.locale.invalid_date(param))
    }

    pub fn unknown_dashboard_period(&self, period: &str) -> ApiError {
        ApiError::NotFound(self.locale.unknown_dashboard_period(period))
    }

    pub fn payload_too_large(&self) -> ApiError {
        ApiError::PayloadTooLarge(self.locale.payload_too_large().to_string())
    }

    pub fn unreadable_body(&self) -> ApiError {
        ApiError::BadRequest(self.locale.unreadable_body().to_string())
    }

    pub fn invalid_path(&self) -> ApiError {
        ApiError::BadRequest(self.locale.invalid_path().to_string())
    }
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            propagate_upstream_status: false,
        }
    }
}

fn upstream_status(err: &BackendError) -> StatusCode {
    match err {
        BackendError::Status { status, .. }
            if status.is_client_error() || status.is_server_error() =>
        {
            *status
        }
        BackendError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::BAD_GATEWAY,
    }
}
