// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Hash values kept as their hex text

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::WireCodec;
use crate::errors::DecodeError;

/// A 32-byte hash as the node sends it: a hex string
///
/// The value is expected to be 64 hex digits, optionally `0x`-prefixed,
/// e.g. `0xf4d07fdb8b5151971886a910e516d418a790dd5f6e068b0588066518a395a600`.
/// That expectation is **not checked**: the text is passed through untouched
/// in both directions.
///
/// Whether this should instead be a fixed 32-byte array is still open; until
/// that is settled, keep the text exactly as received.
///
/// # Examples
///
/// ```
/// use chainwire::{HashString, WireCodec};
///
/// let raw = br#""0xf4d07fdb8b5151971886a910e516d418a790dd5f6e068b0588066518a395a600""#;
/// let hash = HashString::decode_json(raw).unwrap();
/// assert_eq!(hash.encode_json().as_bytes(), raw);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashString(String);

impl HashString {
    /// Wrap a string without validating it
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for HashString {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}

impl From<&str> for HashString {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

impl From<HashString> for String {
    fn from(hash: HashString) -> Self {
        hash.0
    }
}

impl AsRef<str> for HashString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl WireCodec for HashString {
    fn decode_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            other => Err(DecodeError::unexpected_token(other, "a hash string")),
        }
    }

    fn encode_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DecodeErrorKind;

    #[test]
    fn test_pass_through() {
        let hash = HashString::decode_json(br#""0xabc""#).unwrap();
        assert_eq!(hash.as_str(), "0xabc");
        assert_eq!(hash.encode_json(), r#""0xabc""#);
    }

    #[test]
    fn test_no_validation() {
        // Not 32 bytes and not hex, still accepted as-is.
        let hash = HashString::decode_json(br#""hello""#).unwrap();
        assert_eq!(hash.to_string(), "hello");
    }

    #[test]
    fn test_requires_string_token() {
        let err = HashString::decode_json(b"12").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidJson);
    }

    #[test]
    fn test_encode_escapes_text() {
        let hash = HashString::new("a\"b");
        assert_eq!(hash.encode_json(), r#""a\"b""#);
        let back = HashString::decode_json(hash.encode_json().as_bytes()).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_serde_transparent() {
        let hash: HashString = serde_json::from_str(r#""0x01""#).unwrap();
        assert_eq!(hash, HashString::from("0x01"));
        assert_eq!(serde_json::to_string(&hash).unwrap(), r#""0x01""#);
        let text: String = hash.into();
        assert_eq!(text, "0x01");
    }
}
