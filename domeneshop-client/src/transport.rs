//! HTTP transport seam
//!
//! [`DomeneshopClient`](crate::DomeneshopClient) only builds requests and
//! interprets responses; sending them is delegated to an [`HttpTransport`].
//! [`ReqwestTransport`] is the default implementation. Tests and callers with
//! special needs (proxies, custom TLS, recording) can plug in their own.
//!
//! A transport returns the status code and the fully read body for every
//! response it receives, whatever the status. Status checks happen in the
//! client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, create_http_client};
use crate::error::{DomeneshopError, Result};
use crate::types::Credentials;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path plus query string, e.g. `/domains/1/dns?host=www`.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: String) -> Self {
        Self {
            method: HttpMethod::Put,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            body: None,
        }
    }
}

/// Status code and fully read body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends [`ApiRequest`]s to the API.
///
/// Implementations authenticate the request, send it once, and read the whole
/// body before returning. They must not retry and must not treat non-2xx
/// statuses as errors; only failures to get a response at all are `Err`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Default transport backed by `reqwest`.
///
/// The `Authorization` header value is computed once from the credentials at
/// construction and reused for every request.
pub struct ReqwestTransport {
    client: Client,
    config: ClientConfig,
    authorization: String,
}

impl ReqwestTransport {
    pub fn new(credentials: &Credentials, config: ClientConfig) -> Result<Self> {
        credentials.validate()?;
        Ok(Self {
            client: create_http_client(&config)?,
            authorization: credentials.basic_auth_header(),
            config,
        })
    }

    /// API root this transport sends to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.config.url_for(&request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .header("Authorization", &self.authorization)
        .header("Accept", "application/json");

        if let Some(body) = request.body {
            log::debug!("Request Body: {}", truncate_for_log(&body));
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }

        execute_request(builder, request.method, &url).await
    }
}

/// Sends a request and reads the response body.
///
/// The body is read to the end before returning, so the connection is
/// released on every path.
async fn execute_request(
    request_builder: RequestBuilder,
    method: HttpMethod,
    url: &str,
) -> Result<ApiResponse> {
    log::debug!("{method} {url}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            DomeneshopError::Timeout {
                detail: e.to_string(),
            }
        } else {
            DomeneshopError::NetworkError {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("Response Status: {status}");

    let body = response
        .text()
        .await
        .map_err(|e| DomeneshopError::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?;

    log::debug!("Response Body: {}", truncate_for_log(&body));

    Ok(ApiResponse { status, body })
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T>(response_text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(response_text));
        DomeneshopError::ParseError {
            detail: e.to_string(),
        }
    })
}
