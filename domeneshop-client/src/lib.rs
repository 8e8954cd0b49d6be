//! # domeneshop-client
//!
//! An async client for the [Domeneshop](https://www.domeneshop.no/) registrar
//! API: list domains and manage their DNS records.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domeneshop_client::{Credentials, DnsRecord, DomeneshopClient, RecordQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Credentials from DOMENESHOP_TOKEN / DOMENESHOP_SECRET
//!     let client = DomeneshopClient::new(Credentials::from_env()?)?;
//!
//!     // 2. Find the domain
//!     let domains = client.list_domains(Some("example.no")).await?;
//!     let domain = &domains[0];
//!
//!     // 3. List its MX records
//!     let query = RecordQuery::default().record_type("MX");
//!     for record in client.list_dns_records(domain.id, &query).await? {
//!         println!("{} {} {} {}", record.host, record.record_type, record.priority, record.data);
//!     }
//!
//!     // 4. Add an A record
//!     let record = DnsRecord::new("www", "A", "192.0.2.1").with_ttl(3600);
//!     client.add_dns_record(domain.id, &record).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, DomeneshopError>`](DomeneshopError):
//!
//! - [`DomeneshopError::MissingRequiredField`] — the record failed local validation
//!   (no request was sent)
//! - [`DomeneshopError::UnexpectedStatus`] — the API answered with another status
//!   than the endpoint's success code; the code is available via
//!   [`DomeneshopError::status_code`]
//! - [`DomeneshopError::NetworkError`] / [`DomeneshopError::Timeout`] — transport failure
//! - [`DomeneshopError::ParseError`] — the response body could not be decoded
//!
//! Nothing is retried.
//!
//! ## Custom Transports
//!
//! [`DomeneshopClient::with_transport`] accepts any [`HttpTransport`]; the
//! default is [`ReqwestTransport`].

mod client;
mod config;
mod error;
mod transport;
mod types;
mod utils;
mod validation;

// Re-export error types
pub use error::{DomeneshopError, Result};

// Re-export client and configuration
pub use client::{DomeneshopClient, DomeneshopClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};

// Re-export transport seam
pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, ReqwestTransport};

// Re-export types
pub use types::{
    Credentials, DnsRecord, Domain, RecordQuery, SECRET_ENV_VAR, Service, TOKEN_ENV_VAR,
};

// Re-export validation
pub use validation::{is_valid_dns_record, missing_required_field};
