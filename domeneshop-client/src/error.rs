use serde::{Deserialize, Serialize};

/// Unified error type for all Domeneshop API operations.
///
/// Every failure is terminal: nothing is retried internally. The variants map
/// onto four failure classes:
///
/// - local validation: [`MissingRequiredField`](Self::MissingRequiredField),
///   [`MissingCredential`](Self::MissingCredential)
/// - transport: [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout)
/// - unexpected status: [`UnexpectedStatus`](Self::UnexpectedStatus)
/// - encoding: [`ParseError`](Self::ParseError),
///   [`SerializationError`](Self::SerializationError)
///
/// All variants are serializable for structured error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum DomeneshopError {
    /// A DNS record is missing a field required for submission.
    ///
    /// Raised before any request is sent.
    MissingRequiredField {
        /// Wire name of the missing field (`host`, `type`, `data`, `priority`, ...).
        field: String,
    },

    /// A credential value is missing or empty.
    MissingCredential {
        /// Which credential is missing (`token` or `secret`, or the env var name).
        field: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with a status code other than the one the operation expects.
    UnexpectedStatus {
        /// Status code returned by the API.
        status: u16,
        /// Success status code the operation expected.
        expected: u16,
        /// Response body, if the API sent one.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl DomeneshopError {
    /// Status code carried by an [`UnexpectedStatus`](Self::UnexpectedStatus) error.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API reported that the domain or record does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingRequiredField { .. } | Self::MissingCredential { .. } => true,
            Self::UnexpectedStatus { status, .. } => (400..500).contains(status),
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. } => false,
        }
    }
}

impl std::fmt::Display for DomeneshopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField { field } => {
                write!(f, "Missing required field: {field}")
            }
            Self::MissingCredential { field } => {
                write!(f, "Missing credential: {field}")
            }
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::UnexpectedStatus {
                status,
                expected,
                raw_message,
            } => match raw_message.as_deref() {
                Some(msg) if !msg.is_empty() => {
                    write!(f, "HTTP error: {status} (expected {expected}): {msg}")
                }
                _ => write!(f, "HTTP error: {status} (expected {expected})"),
            },
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for DomeneshopError {}

/// Convenience type alias for `Result<T, DomeneshopError>`.
pub type Result<T> = std::result::Result<T, DomeneshopError>;
