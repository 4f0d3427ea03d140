// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for decoding wire values.

use serde::de::{Error as _, Unexpected};
use serde_json::Value;

/// Coarse classification of a [`DecodeError`].
///
/// Useful when a caller only cares about which family of failure happened
/// and not about the offending literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// See [`DecodeError::MalformedNumber`].
    MalformedNumber,
    /// See [`DecodeError::MalformedBytes`].
    MalformedBytes,
    /// See [`DecodeError::MalformedAddress`].
    MalformedAddress,
    /// See [`DecodeError::MalformedObject`].
    MalformedObject,
    /// See [`DecodeError::InvalidJson`].
    InvalidJson,
}

/// Errors that can occur while decoding a wire value.
///
/// Decoding is all-or-nothing: a compound value never yields a partially
/// populated result. Every variant carries the offending literal or field
/// name so the failure can be traced back to the raw response.
///
/// # Examples
///
/// ```rust
/// use chainwire::{DecodeError, WireCodec, U64};
///
/// match U64::decode_json(br#""18446744073709551616""#) {
///     Err(DecodeError::MalformedNumber { literal, .. }) => {
///         assert_eq!(literal, "18446744073709551616");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The literal is not a base-10 unsigned integer, or exceeds `u64::MAX`.
    #[error("Malformed u64 literal {literal:?}: {reason}")]
    MalformedNumber {
        /// The literal that failed to parse
        literal: String,
        /// Why the literal was rejected
        reason: String,
    },

    /// The string is neither valid hex nor valid standard base64.
    #[error("Malformed bytes {value:?}: {reason}")]
    MalformedBytes {
        /// The string that failed to decode
        value: String,
        /// Which decoding attempt(s) failed
        reason: String,
    },

    /// The string is not a valid account address.
    #[error("Malformed account address {value:?}: {reason}")]
    MalformedAddress {
        /// The string that failed to parse
        value: String,
        /// Why the address was rejected
        reason: String,
    },

    /// A compound value is not an object, misses a required field, or has a
    /// field that failed its own decoder.
    #[error("Malformed {object}: {reason}")]
    MalformedObject {
        /// Name of the compound type being decoded
        object: &'static str,
        /// The offending field, if the failure is attributable to one
        field: Option<&'static str>,
        /// Human-readable description of the failure
        reason: String,
        /// The field decoder's error, if a field was present but malformed
        #[source]
        source: Option<Box<DecodeError>>,
    },

    /// The input is not JSON, or not the JSON token type the codec expects.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl DecodeError {
    /// Create a `MalformedNumber` error.
    pub fn malformed_number(literal: impl Into<String>, reason: impl Into<String>) -> Self {
        DecodeError::MalformedNumber {
            literal: literal.into(),
            reason: reason.into(),
        }
    }

    /// Create a `MalformedBytes` error.
    pub fn malformed_bytes(value: impl Into<String>, reason: impl Into<String>) -> Self {
        DecodeError::MalformedBytes {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a `MalformedAddress` error.
    pub fn malformed_address(value: impl Into<String>, reason: impl Into<String>) -> Self {
        DecodeError::MalformedAddress {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a `MalformedObject` error for a token that is not a JSON object.
    pub fn not_an_object(object: &'static str, found: &Value) -> Self {
        DecodeError::MalformedObject {
            object,
            field: None,
            reason: format!("expected a JSON object, found {}", token_name(found)),
            source: None,
        }
    }

    /// Create a `MalformedObject` error for a required field that is absent.
    pub fn missing_field(object: &'static str, field: &'static str) -> Self {
        DecodeError::MalformedObject {
            object,
            field: Some(field),
            reason: format!("missing field `{field}`"),
            source: None,
        }
    }

    /// Create a `MalformedObject` error wrapping a field decoder's failure.
    pub fn invalid_field(object: &'static str, field: &'static str, source: DecodeError) -> Self {
        DecodeError::MalformedObject {
            object,
            field: Some(field),
            reason: format!("invalid field `{field}`: {source}"),
            source: Some(Box::new(source)),
        }
    }

    /// Create an `InvalidJson` error for a token of the wrong JSON type.
    pub fn unexpected_token(found: &Value, expected: &'static str) -> Self {
        DecodeError::InvalidJson(serde_json::Error::invalid_type(
            unexpected(found),
            &expected,
        ))
    }

    /// Classify this error.
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::MalformedNumber { .. } => DecodeErrorKind::MalformedNumber,
            DecodeError::MalformedBytes { .. } => DecodeErrorKind::MalformedBytes,
            DecodeError::MalformedAddress { .. } => DecodeErrorKind::MalformedAddress,
            DecodeError::MalformedObject { .. } => DecodeErrorKind::MalformedObject,
            DecodeError::InvalidJson(_) => DecodeErrorKind::InvalidJson,
        }
    }

    /// The field a `MalformedObject` error is attributed to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::MalformedObject { field, .. } => *field,
            _ => None,
        }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => Unexpected::Unsigned(u),
            (None, Some(i), _) => Unexpected::Signed(i),
            (None, None, Some(f)) => Unexpected::Float(f),
            (None, None, None) => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn token_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            DecodeError::malformed_number("x", "bad").kind(),
            DecodeErrorKind::MalformedNumber
        );
        assert_eq!(
            DecodeError::malformed_bytes("x", "bad").kind(),
            DecodeErrorKind::MalformedBytes
        );
        assert_eq!(
            DecodeError::malformed_address("x", "bad").kind(),
            DecodeErrorKind::MalformedAddress
        );
        assert_eq!(
            DecodeError::missing_field("EventGuid", "creation_number").kind(),
            DecodeErrorKind::MalformedObject
        );
        assert_eq!(
            DecodeError::unexpected_token(&json!(1), "a JSON string").kind(),
            DecodeErrorKind::InvalidJson
        );
    }

    #[test]
    fn test_invalid_field_keeps_source() {
        let inner = DecodeError::malformed_number("abc", "expected base-10 digits");
        let err = DecodeError::invalid_field("EventGuid", "creation_number", inner);

        assert_eq!(err.field(), Some("creation_number"));
        let source = err
            .source()
            .and_then(|s| s.downcast_ref::<DecodeError>())
            .expect("source should be a DecodeError");
        assert_eq!(source.kind(), DecodeErrorKind::MalformedNumber);
    }

    #[test]
    fn test_not_an_object_message() {
        let err = DecodeError::not_an_object("EventGuid", &json!([1, 2]));
        assert_eq!(err.field(), None);
        assert_eq!(
            err.to_string(),
            "Malformed EventGuid: expected a JSON object, found an array"
        );
    }

    #[test]
    fn test_unexpected_token_message() {
        let err = DecodeError::unexpected_token(&json!(true), "a JSON string");
        assert!(err.to_string().contains("invalid type: boolean `true`"));
        assert!(err.to_string().contains("a JSON string"));
    }
}
