//! Client configuration.

use std::time::Duration;

use reqwest::Client;

use crate::error::{DomeneshopError, Result};

/// Production API endpoint (version 0 of the Domeneshop API).
pub const DEFAULT_BASE_URL: &str = "https://api.domeneshop.no/v0";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings for the default reqwest-backed transport.
///
/// # Default
///
/// Production base URL, 10 s connect timeout, 30 s request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root; request paths such as `/domains` are appended to it.
    pub base_url: String,
    /// Maximum time to establish a connection.
    pub connect_timeout: Duration,
    /// Maximum time for a whole request, body included.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Full URL for an API path.
    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// 创建带超时配置的 HTTP Client
pub(crate) fn create_http_client(config: &ClientConfig) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| DomeneshopError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.domeneshop.no/v0");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn url_for_joins_without_double_slash() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:8080/v0/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.url_for("/domains/1/dns"),
            "http://127.0.0.1:8080/v0/domains/1/dns"
        );
    }
}
