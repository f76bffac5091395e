//! Error types shared across the codec.

use thiserror::Error;

/// A bounded identifier string was built from input longer than its bound.
///
/// The bound is a protocol contract, so this is raised at every
/// construction site, including values built from trusted internal state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("string of length {length} exceeds the maximum of {limit} characters")]
pub struct LengthViolation {
    pub limit: usize,
    pub length: usize,
}

/// A timestamp string was not RFC 3339 conformant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse \"{0}\" as an RFC 3339 timestamp")]
pub struct TimestampParseError(pub String);

/// A wire string matched none of an enumeration's canonical tokens.
///
/// No fallback enumerator is synthesized; callers observe the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{value}\" is not a known {enum_name}")]
pub struct UnknownEnumerator {
    pub enum_name: &'static str,
    pub value: String,
}

impl UnknownEnumerator {
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

/// Decoding a message from its wire object failed.
///
/// Reports the first violation encountered: a missing required field, an
/// unknown enumerator, an over-long string or a malformed timestamp. The
/// message is not partially constructed.
#[derive(Debug, Error)]
#[error("failed to decode {message_type}: {source}")]
pub struct DecodeError {
    pub message_type: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Encoding a message to its wire object failed.
///
/// Construction already enforces every wire invariant, so seeing this
/// means a value escaped validation; treat it as a bug, not as a
/// recoverable protocol error.
#[derive(Debug, Error)]
#[error("failed to encode {message_type}: {source}")]
pub struct EncodeError {
    pub message_type: &'static str,
    #[source]
    pub source: serde_json::Error,
}
