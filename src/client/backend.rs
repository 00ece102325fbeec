use axum::body::Bytes;
use reqwest::{
    Client, Method, StatusCode, Url,
    header::{CONNECTION, CONTENT_LENGTH, HOST, HeaderMap, HeaderName},
};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::BackendConfig;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Backend request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("Backend request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout(err)
        } else {
            BackendError::Transport(err)
        }
    }
}

/// Backend reply relayed as-is by the generic passthrough route.
#[derive(Debug)]
pub struct ForwardedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(config.base_url.clone()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(BackendError::Transport)?;

        tracing::info!("Backend client configured for {}", base_url);

        Ok(BackendClient { http, base_url })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    /// `.` and `..` are refused since the URL parser would resolve them away.
    pub fn resource_url(&self, segments: &[&str]) -> Result<Url, BackendError> {
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(BackendError::InvalidUrl(format!(
                "dot segment '{}' in resource path",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Join an already-encoded request path onto the base URL, keeping it verbatim.
    /// The result always stays under the base path.
    pub fn forward_url(&self, path: &str, query: Option<&str>) -> Result<Url, BackendError> {
        if has_dot_segments(path) {
            return Err(BackendError::InvalidUrl(format!(
                "dot segment in forwarded path '{}'",
                path
            )));
        }

        let base_path = self.base_url.path().trim_end_matches('/');
        let prefix = format!("{}/", base_path);

        let mut url = self.base_url.clone();
        url.set_path(&format!("{}{}", prefix, path.trim_start_matches('/')));
        if !url.path().starts_with(&prefix) {
            return Err(BackendError::InvalidUrl(format!(
                "forwarded path '{}' leaves {}",
                path, prefix
            )));
        }
        url.set_query(query);
        Ok(url)
    }

    /// GET a backend resource and decode its JSON body. Any non-2xx status is an error.
    pub async fn get_json(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Value, BackendError> {
        let url = self.resource_url(segments)?;
        tracing::debug!("GET {} query={:?}", url, query);

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// Send a request to the same path on the backend and hand back whatever it answers,
    /// error statuses included.
    pub async fn forward(
        &self,
        path: &str,
        method: Method,
        query: Option<&str>,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<ForwardedResponse, BackendError> {
        let url = self.forward_url(path, query)?;
        tracing::debug!("{} {} (forwarded)", method, url);

        let mut outbound = end_to_end_headers(headers);
        outbound.remove(HOST);

        let response = self
            .http
            .request(method, url)
            .headers(outbound)
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let relayed = end_to_end_headers(response.headers());
        let body = response.bytes().await?;

        Ok(ForwardedResponse {
            status,
            headers: relayed,
            body,
        })
    }
}

/// Connection-scoped headers a proxy must not pass along.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "proxy-connection"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Copy `headers` without hop-by-hop headers, anything the `Connection` header
/// nominates, or `Content-Length` (recomputed for the relayed body).
pub fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let nominated: Vec<HeaderName> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|token| HeaderName::from_bytes(token.trim().as_bytes()).ok())
        .collect();

    let mut kept = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || name == CONTENT_LENGTH || nominated.contains(name) {
            continue;
        }
        kept.append(name.clone(), value.clone());
    }
    kept
}

/// `.` or `..`, including percent-encoded forms such as `%2e%2E`.
pub fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

pub fn has_dot_segments(path: &str) -> bool {
    path.split(['/', '\\']).any(is_dot_segment)
}
