//! Utility modules.

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;

/// Serde helper for numeric fields the API sends as strings.
pub mod wire_string;
