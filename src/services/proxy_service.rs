use axum::body::Bytes;
use reqwest::{
    Method,
    header::{HeaderMap, HeaderValue},
};
use uuid::Uuid;

use crate::client::{BackendClient, BackendError, ForwardedResponse};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct ProxyService {
    client: BackendClient,
    max_body_bytes: usize,
}

impl ProxyService {
    pub fn new(client: BackendClient, max_body_bytes: usize) -> Self {
        Self {
            client,
            max_body_bytes,
        }
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// Forward a request to the same path on the backend.
    ///
    /// The inbound `x-request-id` is kept, or a fresh one is attached, so the
    /// hop can be correlated in backend logs.
    pub async fn fetch_from_backend(
        &self,
        path: &str,
        method: Method,
        query: Option<&str>,
        mut headers: HeaderMap,
        body: Bytes,
    ) -> Result<ForwardedResponse, BackendError> {
        let request_id = match headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            Some(existing) => existing.to_string(),
            None => {
                let generated = Uuid::new_v4().to_string();
                if let Ok(value) = HeaderValue::from_str(&generated) {
                    headers.insert(REQUEST_ID_HEADER, value);
                }
                generated
            }
        };

        tracing::debug!(request_id = %request_id, "Forwarding {} {} to backend", method, path);

        let response = self
            .client
            .forward(path, method, query, &headers, body)
            .await?;

        tracing::debug!(
            request_id = %request_id,
            "Backend answered {} for {}",
            response.status,
            path
        );

        Ok(response)
    }
}
