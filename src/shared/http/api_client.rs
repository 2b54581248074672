// src/shared/http/api_client.rs
use std::fmt;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::shared::http::ApiError;

//
// ──────────────────────────────────────────────────────────
// Request description
// ──────────────────────────────────────────────────────────
//

/// Where the request is issued from. The backend is reachable on an internal
/// network from the server, and only through its public URL from a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    Server,
    Browser,
}

/// Relative API path. Segments are percent-encoded when the URL is built, so
/// slugs coming from a request path can be passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl ApiPath {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
            query: Vec::new(),
        }
    }

    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// Extra per-request settings layered on top of the JSON defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

//
// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, context: ExecutionContext) -> Self {
        Self::with_base_url(config.base_url(context))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &ApiPath) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::network(format!("invalid base url {}: {}", self.base_url, e)))?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::network(format!("base url {} cannot carry a path", self.base_url))
            })?;
            segments.pop_if_empty();
            for segment in &path.segments {
                segments.push(segment);
            }
        }

        if !path.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &path.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Issues a GET and decodes the JSON body into `T`.
    pub async fn get_json<T>(&self, path: &ApiPath, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path)?;
        debug!(%url, "outbound request");

        let mut request = self
            .http
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        for (name, value) in options.headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "request did not complete");
            ApiError::network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            warn!(%url, status = status.as_u16(), "request rejected");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                status_text,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "response body did not match the expected shape");
            ApiError::Decode(e.to_string())
        })
    }
}
