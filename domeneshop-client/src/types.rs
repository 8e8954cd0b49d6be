use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DomeneshopError, Result};
use crate::utils::log_sanitizer::mask_secret;
use crate::utils::wire_string;

/// Wire format of `expiry_date` / `registered_date`.
const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

// ============ Domain Types ============

/// A domain registered with (or hosted at) Domeneshop.
///
/// This is a read-only projection of remote state. Fields missing from the
/// JSON decode to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    /// Numeric domain identifier, used in all DNS record paths.
    pub id: u64,
    /// Domain name (e.g., `"example.no"`).
    pub domain: String,
    /// Registration status as reported by the registrar (e.g., `"active"`).
    pub status: String,
    /// Expiry date, `YYYY-MM-DD`.
    pub expiry_date: String,
    /// Registration date, `YYYY-MM-DD`.
    pub registered_date: String,
    /// Whether the domain renews automatically.
    pub renew: bool,
    /// Name of the registrant.
    pub registrant: String,
    /// Nameserver hostnames, in the order the registrar lists them.
    pub nameservers: Vec<String>,
    /// Services enabled for this domain.
    pub services: Service,
}

impl Domain {
    /// Parsed [`expiry_date`](Self::expiry_date), if present and well-formed.
    pub fn expires_on(&self) -> Option<NaiveDate> {
        parse_wire_date(&self.expiry_date)
    }

    /// Parsed [`registered_date`](Self::registered_date), if present and well-formed.
    pub fn registered_on(&self) -> Option<NaiveDate> {
        parse_wire_date(&self.registered_date)
    }
}

/// Capability flags for a [`Domain`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Domain is registered through Domeneshop.
    pub registrar: bool,
    /// DNS is hosted by Domeneshop; DNS record operations require this.
    pub dns: bool,
    /// Email service is enabled.
    pub email: bool,
    /// Webhotel tier (e.g., `"none"`, `"small"`).
    pub webhotel: String,
}

fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT).ok()
}

// ============ DNS Record Types ============

/// One entry in a domain's DNS zone.
///
/// `priority`, `weight` and `port` are strings on the wire and only meaningful
/// for some record types (MX uses `priority`; SRV uses all three). Empty
/// strings and a missing `id`/`ttl` are omitted from outbound JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Identifier assigned by the API once the record exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Host name relative to the domain (`"@"` for the apex).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Record type (`A`, `AAAA`, `CNAME`, `MX`, `SRV`, `TXT`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    /// Record value (address, target host, text, ...).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    /// Priority (MX and SRV).
    #[serde(
        default,
        deserialize_with = "wire_string::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub priority: String,
    /// Weight (SRV).
    #[serde(
        default,
        deserialize_with = "wire_string::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub weight: String,
    /// Port (SRV).
    #[serde(
        default,
        deserialize_with = "wire_string::deserialize",
        skip_serializing_if = "String::is_empty"
    )]
    pub port: String,
}

impl DnsRecord {
    /// A record with the three fields every type requires.
    pub fn new(
        host: impl Into<String>,
        record_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            record_type: record_type.into(),
            data: data.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Check the record is eligible for creation.
    ///
    /// See [`missing_required_field`](crate::missing_required_field) for the rules.
    pub fn validate(&self) -> Result<()> {
        match crate::validation::missing_required_field(self) {
            Some(field) => Err(DomeneshopError::MissingRequiredField {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Filters for listing DNS records.
///
/// Both filters are optional; an empty string counts as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    /// Only return records for this host.
    pub host: Option<String>,
    /// Only return records of this type.
    pub record_type: Option<String>,
}

impl RecordQuery {
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// Non-empty filters as `(key, value)` pairs, `host` before `type`.
    pub(crate) fn pairs(&self) -> Vec<(&'static str, &str)> {
        [("host", &self.host), ("type", &self.record_type)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v))
            })
            .collect()
    }
}

// ============ Credentials ============

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "DOMENESHOP_TOKEN";
/// Environment variable holding the API secret.
pub const SECRET_ENV_VAR: &str = "DOMENESHOP_SECRET";

/// API credentials: the token/secret pair issued by Domeneshop.
///
/// Used for HTTP Basic authentication. The `Debug` output masks both values.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// API token (Basic auth user name).
    pub token: String,
    /// API secret (Basic auth password).
    pub secret: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }

    /// Read credentials from `DOMENESHOP_TOKEN` and `DOMENESHOP_SECRET`.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| DomeneshopError::MissingCredential {
                    field: name.to_string(),
                })
        };
        Ok(Self::new(read(TOKEN_ENV_VAR)?, read(SECRET_ENV_VAR)?))
    }

    /// Reject empty or whitespace-only values.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("token", &self.token), ("secret", &self.secret)] {
            if value.trim().is_empty() {
                return Err(DomeneshopError::MissingCredential {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// `Authorization` header value: `Basic base64(token:secret)`.
    pub fn basic_auth_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.token, self.secret));
        format!("Basic {encoded}")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &mask_secret(&self.token))
            .field("secret", &mask_secret(&self.secret))
            .finish()
    }
}
