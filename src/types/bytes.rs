// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Byte sequences that may arrive as hex or base64 strings
//!
//! The node sends most byte payloads as `0x`-prefixed hex, but some fields
//! are base64. Which encoding a string uses is sniffed from its shape:
//!
//! | Shape                  | Decoded as                       |
//! |------------------------|----------------------------------|
//! | starts with `0x`       | hex                              |
//! | ends with `=`          | standard base64                  |
//! | anything else          | hex, falling back to base64      |
//!
//! The rows are checked top to bottom. Reordering them changes which
//! ambiguous strings decode and to what: `"1234"` is valid in both alphabets
//! and must decode as hex.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use alloy_primitives::hex;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::WireCodec;
use crate::config::constants::{BASE64_PADDING, HEX_PREFIX};
use crate::errors::DecodeError;
use crate::spans;

/// An owned byte sequence decoded from a hex or base64 JSON string
///
/// Always encodes as `0x`-prefixed lowercase hex, whichever encoding it was
/// decoded from. Consumers can rely on the bytes round-tripping, not the
/// text.
///
/// # Examples
///
/// ```
/// use chainwire::{HexBytes, WireCodec};
///
/// let from_hex = HexBytes::decode_json(br#""0x12""#).unwrap();
/// let from_base64 = HexBytes::decode_json(br#""Eg==""#).unwrap();
/// assert_eq!(from_hex, from_base64);
/// assert_eq!(from_base64.encode_json(), r#""0x12""#);
///
/// // The empty sequence is just the prefix
/// assert!(HexBytes::decode_json(br#""0x""#).unwrap().is_empty());
/// assert_eq!(HexBytes::default().to_string(), "0x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HexBytes(Vec<u8>);

impl HexBytes {
    /// Wrap an owned byte vector
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Take the bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Decode the content of a wire string (already unquoted)
    ///
    /// See the module docs for the decision table.
    pub fn parse_wire_str(s: &str) -> Result<Self, DecodeError> {
        let span = spans::decode_bytes(s.len());
        let _guard = span.enter();

        let result = sniff_and_decode(s).map(Self);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "failed to decode bytes");
        }
        result
    }
}

fn sniff_and_decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    if s.is_empty() {
        return Err(DecodeError::malformed_bytes(
            s,
            "empty string is neither valid hex nor valid base64",
        ));
    }

    if s.starts_with(HEX_PREFIX) {
        tracing::trace!("hex prefix present, decoding as hex");
        return hex::decode(s)
            .map_err(|e| DecodeError::malformed_bytes(s, format!("invalid hex: {e}")));
    }

    if s.ends_with(BASE64_PADDING) {
        tracing::trace!("base64 padding present, decoding as base64");
        return BASE64
            .decode(s)
            .map_err(|e| DecodeError::malformed_bytes(s, format!("invalid base64: {e}")));
    }

    match hex::decode(s) {
        Ok(bytes) => Ok(bytes),
        Err(hex_err) => {
            tracing::trace!(error = %hex_err, "not hex, falling back to base64");
            BASE64.decode(s).map_err(|b64_err| {
                DecodeError::malformed_bytes(
                    s,
                    format!("neither valid hex ({hex_err}) nor valid base64 ({b64_err})"),
                )
            })
        }
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<HexBytes> for Vec<u8> {
    fn from(bytes: HexBytes) -> Self {
        bytes.0
    }
}

impl AsRef<[u8]> for HexBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for HexBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

/// Canonical form: `0x` followed by lowercase hex digits
impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(&self.0))
    }
}

impl FromStr for HexBytes {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire_str(s)
    }
}

impl WireCodec for HexBytes {
    fn decode_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Self::parse_wire_str(s),
            other => Err(DecodeError::unexpected_token(
                other,
                "a hex or base64 JSON string",
            )),
        }
    }

    fn encode_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn encode_json(&self) -> String {
        // Hex digits and the prefix never need JSON escaping.
        format!("\"{self}\"")
    }
}

impl Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_wire_str(&s).map_err(serde::de::Error::custom)
    }
}
