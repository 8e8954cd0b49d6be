//! API facade: one method per Domeneshop endpoint.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{DomeneshopError, Result};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport, parse_json};
use crate::types::{Credentials, DnsRecord, Domain, RecordQuery};

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;
const STATUS_NO_CONTENT: u16 = 204;

/// Client for the Domeneshop API.
///
/// Each method sends exactly one request, checks the status code against the
/// one the endpoint documents for success, and decodes the body where there
/// is one. Nothing is retried or cached.
///
/// # Construction
///
/// ```rust,no_run
/// use domeneshop_client::{Credentials, DomeneshopClient};
///
/// # fn main() -> domeneshop_client::Result<()> {
/// let client = DomeneshopClient::new(Credentials::new("token", "secret"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DomeneshopClient {
    transport: Arc<dyn HttpTransport>,
}

/// Builder for [`DomeneshopClient`] with configurable endpoint, timeouts or transport.
pub struct DomeneshopClientBuilder {
    credentials: Credentials,
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl DomeneshopClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            config: ClientConfig::default(),
            transport: None,
        }
    }

    /// Override the API root (default: `https://api.domeneshop.no/v0`).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the connect timeout (default: 10 s).
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the overall request timeout (default: 30 s).
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Send requests through `transport` instead of the default reqwest one.
    ///
    /// The transport is then responsible for authentication; credentials are
    /// still checked for blank values, the endpoint and timeout settings are
    /// not used.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DomeneshopClient> {
        let transport = match self.transport {
            Some(transport) => {
                self.credentials.validate()?;
                transport
            }
            None => Arc::new(ReqwestTransport::new(&self.credentials, self.config)?),
        };
        Ok(DomeneshopClient::with_transport(transport))
    }
}

/// Body of a `201 Created` answer to a record creation.
#[derive(Deserialize)]
struct CreatedRecord {
    id: u64,
}

impl DomeneshopClient {
    /// Creates a client for the production API with default timeouts.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the client configuration.
    pub fn builder(credentials: Credentials) -> DomeneshopClientBuilder {
        DomeneshopClientBuilder::new(credentials)
    }

    /// Creates a client on top of a caller-supplied transport.
    ///
    /// The transport is responsible for authentication.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// List domains, optionally only those matching `domain`.
    ///
    /// `GET /domains[?domain=X]`, expects 200.
    pub async fn list_domains(&self, domain: Option<&str>) -> Result<Vec<Domain>> {
        let path = with_query("/domains".to_string(), &[("domain", domain)]);
        self.fetch(ApiRequest::get(path)).await
    }

    /// Fetch a single domain.
    ///
    /// `GET /domains/{id}`, expects 200.
    pub async fn get_domain(&self, domain_id: u64) -> Result<Domain> {
        self.fetch(ApiRequest::get(format!("/domains/{domain_id}")))
            .await
    }

    /// List the DNS records of a domain, optionally filtered by host and/or type.
    ///
    /// `GET /domains/{id}/dns[?host=H][&type=T]`, expects 200.
    pub async fn list_dns_records(
        &self,
        domain_id: u64,
        query: &RecordQuery,
    ) -> Result<Vec<DnsRecord>> {
        let pairs: Vec<_> = query
            .pairs()
            .into_iter()
            .map(|(key, value)| (key, Some(value)))
            .collect();
        let path = with_query(records_path(domain_id), &pairs);
        self.fetch(ApiRequest::get(path)).await
    }

    /// Fetch a single DNS record.
    ///
    /// `GET /domains/{id}/dns/{recordId}`, expects 200.
    pub async fn get_dns_record(&self, domain_id: u64, record_id: u64) -> Result<DnsRecord> {
        self.fetch(ApiRequest::get(record_path(domain_id, record_id)))
            .await
    }

    /// Create a DNS record.
    ///
    /// The record is validated locally first; an invalid record fails with
    /// [`DomeneshopError::MissingRequiredField`] and nothing is sent.
    ///
    /// `POST /domains/{id}/dns`, expects 201. Returns the new record's id when
    /// the response body carries one.
    pub async fn add_dns_record(&self, domain_id: u64, record: &DnsRecord) -> Result<Option<u64>> {
        if let Err(e) = record.validate() {
            log::warn!("Refusing to submit DNS record for domain {domain_id}: {e}");
            return Err(e);
        }

        let body = to_json(record)?;
        let response = self
            .execute(ApiRequest::post(records_path(domain_id), body), STATUS_CREATED)
            .await?;

        Ok(serde_json::from_str::<CreatedRecord>(&response.body)
            .ok()
            .map(|created| created.id))
    }

    /// Replace a DNS record.
    ///
    /// `PUT /domains/{id}/dns/{recordId}`, expects 204.
    pub async fn update_dns_record(
        &self,
        domain_id: u64,
        record_id: u64,
        record: &DnsRecord,
    ) -> Result<()> {
        let body = to_json(record)?;
        self.execute(
            ApiRequest::put(record_path(domain_id, record_id), body),
            STATUS_NO_CONTENT,
        )
        .await
        .map(|_| ())
    }

    /// Delete a DNS record.
    ///
    /// `DELETE /domains/{id}/dns/{recordId}`, expects 204.
    pub async fn delete_dns_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        self.execute(
            ApiRequest::delete(record_path(domain_id, record_id)),
            STATUS_NO_CONTENT,
        )
        .await
        .map(|_| ())
    }

    /// Send a GET expecting 200 and decode the body.
    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.execute(request, STATUS_OK).await?;
        parse_json(&response.body)
    }

    /// Send a request and require `expected` as the status code.
    async fn execute(&self, request: ApiRequest, expected: u16) -> Result<ApiResponse> {
        let method = request.method;
        let path = request.path.clone();

        let result = match self.transport.send(request).await {
            Ok(response) if response.status == expected => Ok(response),
            Ok(response) => Err(DomeneshopError::UnexpectedStatus {
                status: response.status,
                expected,
                raw_message: Some(response.body).filter(|b| !b.is_empty()),
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("{method} {path} failed: {e}");
            } else {
                log::error!("{method} {path} failed: {e}");
            }
        }
        result
    }
}

impl std::fmt::Debug for DomeneshopClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomeneshopClient").finish_non_exhaustive()
    }
}

fn records_path(domain_id: u64) -> String {
    format!("/domains/{domain_id}/dns")
}

fn record_path(domain_id: u64, record_id: u64) -> String {
    format!("/domains/{domain_id}/dns/{record_id}")
}

/// Append the non-empty `pairs` to `path` as a percent-encoded query string.
fn with_query(mut path: String, pairs: &[(&str, Option<&str>)]) -> String {
    let mut separator = '?';
    for (key, value) in pairs {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            path.push(separator);
            path.push_str(key);
            path.push('=');
            path.push_str(&urlencoding::encode(value));
            separator = '&';
        }
    }
    path
}

fn to_json<B: Serialize>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(|e| DomeneshopError::SerializationError {
        detail: e.to_string(),
    })
}
