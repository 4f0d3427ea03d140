// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The [`WireCodec`] trait shared by every wire value type.

use serde_json::Value;

use crate::errors::DecodeError;

/// Symmetric decode/encode between a JSON wire value and a typed value.
///
/// Decoding is tolerant of the representations the node may send; encoding
/// always produces the single canonical form of the type. Encoding never
/// fails.
///
/// Call sites always know the concrete type, so the trait is used through
/// static dispatch only.
///
/// # Examples
///
/// ```rust
/// use chainwire::{HexBytes, WireCodec};
///
/// let bytes = HexBytes::decode_json(br#""EjRW""#).unwrap();
/// assert_eq!(bytes.as_ref(), &[0x12, 0x34, 0x56]);
/// assert_eq!(bytes.encode_json(), r#""0x123456""#);
/// ```
pub trait WireCodec: Sized {
    /// Decode from an already-parsed JSON value.
    fn decode_value(value: &Value) -> Result<Self, DecodeError>;

    /// Encode into the canonical JSON value.
    fn encode_value(&self) -> Value;

    /// Decode from the raw bytes of a single JSON token.
    fn decode_json(raw: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(raw)?;
        Self::decode_value(&value)
    }

    /// Encode into canonical JSON text.
    fn encode_json(&self) -> String {
        self.encode_value().to_string()
    }
}
