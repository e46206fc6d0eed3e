//! # HTTP Client Adapter
//!
//! Wraps outbound requests to the job-board REST backend and normalizes
//! the success and failure shapes every resource client relies on.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base URL used when no profile or command-line override supplies one
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Message carried by a server error whose body could not be parsed
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Process-wide API configuration, fixed once the adapter is built
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    default_headers: HashMap<String, String>,
}

impl ApiConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: HashMap::new(),
        }
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Normalized success value of a request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Best-effort parse of a failed response body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Failure of a single request
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request could not complete (connection refused, reset, TLS, ...)
    #[error("request could not complete: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("server rejected request with status {status}: {}", .body.error.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Server { status: StatusCode, body: ErrorBody },

    /// A 2xx body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL and path do not form a valid URL
    #[error("invalid request url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl RequestError {
    /// Message supplied by the server, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Server { body, .. } => body.error.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a server rejection
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// HTTP client bound to one [`ApiConfig`]
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new client. No request is issued.
    pub fn new(config: ApiConfig) -> Result<Self, RequestError> {
        tracing::debug!("Creating ApiClient for {}", config.base_url());
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url_for(&self, path: &str) -> Result<url::Url, RequestError> {
        let url = format!("{}{}", self.config.base_url, path);
        url::Url::parse(&url).map_err(|source| RequestError::InvalidUrl { url, source })
    }

    /// Perform one request and return the parsed JSON body.
    ///
    /// An empty 2xx body is returned as `Value::Null`. Any non-2xx status
    /// fails with [`RequestError::Server`] regardless of the body.
    ///
    /// An error body that is not JSON, or lacks an `error` field, yields
    /// `ErrorBody { error: None }` rather than a synthesized
    /// "Request failed" message. Callers show their own per-action text
    /// in that case, and [`GENERIC_FAILURE_MESSAGE`] only appears in the
    /// error's `Display` output.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<serde_json::Value>, RequestError> {
        let url = self.url_for(path)?;
        tracing::debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");
        for (name, value) in &self.config.default_headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("{} {} could not complete: {}", method, url, e);
            RequestError::Transport(e)
        })?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("{} {} -> {}", method, url, status.as_u16());

        if !status.is_success() {
            let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_default();
            return Err(RequestError::Server { status, body });
        }

        let data = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        Ok(ApiResponse { data })
    }

    /// GET a path and decode the body into `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, RequestError> {
        let response = self.request::<()>(Method::GET, path, None).await?;
        decode(response)
    }

    /// POST a JSON body and decode the created entity
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, path, Some(body)).await?;
        decode(response)
    }

    /// PATCH a partial JSON body and decode the updated entity
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::PATCH, path, Some(body)).await?;
        decode(response)
    }

    /// DELETE a path, ignoring whatever body the server sends back
    pub async fn delete(&self, path: &str) -> Result<(), RequestError> {
        self.request::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(
    response: ApiResponse<serde_json::Value>,
) -> Result<ApiResponse<T>, RequestError> {
    Ok(ApiResponse {
        data: serde_json::from_value(response.data)?,
    })
}
