// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for u64 values that may arrive as JSON numbers or strings
//!
//! Node APIs quote 64-bit integers so that consumers whose native number type
//! is a double do not lose precision. Some endpoints still send bare numbers,
//! so decoding accepts both, while encoding always quotes.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::WireCodec;
use crate::errors::DecodeError;
use crate::spans;

/// A u64 decoded from either a JSON string (`"42"`) or a JSON number (`42`)
///
/// Encodes as a quoted decimal string, so a bare-number input is normalized
/// to the string form on the way back out.
///
/// # Examples
///
/// ```
/// use chainwire::{U64, WireCodec};
///
/// let quoted = U64::decode_json(br#""7""#).unwrap();
/// let bare = U64::decode_json(b"7").unwrap();
/// assert_eq!(quoted, bare);
/// assert_eq!(bare.encode_json(), r#""7""#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct U64(u64);

impl U64 {
    /// Zero
    pub const ZERO: Self = Self(0);

    /// Largest representable value
    pub const MAX: Self = Self(u64::MAX);

    /// Wrap a u64
    ///
    /// Every u64 satisfies the type's invariant, so no check is needed here.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner u64
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Parse a base-10 literal
    ///
    /// Only ASCII digits are accepted: no sign, no whitespace, no underscores.
    /// Leading zeros are allowed.
    pub fn parse_literal(literal: &str) -> Result<Self, DecodeError> {
        if literal.is_empty() {
            return Err(DecodeError::malformed_number(literal, "empty literal"));
        }
        if !literal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::malformed_number(
                literal,
                "expected only base-10 digits",
            ));
        }
        literal
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DecodeError::malformed_number(literal, e.to_string()))
    }
}

impl From<u64> for U64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<U64> for u64 {
    fn from(value: U64) -> Self {
        value.0
    }
}

impl fmt::Display for U64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for U64 {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl WireCodec for U64 {
    fn decode_value(value: &Value) -> Result<Self, DecodeError> {
        let span = spans::decode_u64();
        let _guard = span.enter();

        let result = match value {
            Value::String(s) => Self::parse_literal(s),
            Value::Number(n) => match n.as_u64() {
                Some(v) => Ok(Self(v)),
                None => Err(DecodeError::malformed_number(
                    n.to_string(),
                    "number is negative, fractional or out of range",
                )),
            },
            // Any other token is treated as a bare literal, which never parses.
            other => Self::parse_literal(&other.to_string()),
        };
        if let Err(e) = &result {
            tracing::debug!(error = %e, "failed to decode u64");
        }
        result
    }

    fn encode_value(&self) -> Value {
        Value::String(self.0.to_string())
    }

    /// Decode from the raw bytes of a JSON token.
    ///
    /// A token whose first and last bytes are both `"` is unescaped as a JSON
    /// string and its content parsed; any other token is parsed as-is. This
    /// keeps the literal text of out-of-range bare numbers in the error.
    /// Surrounding JSON whitespace is ignored.
    fn decode_json(raw: &[u8]) -> Result<Self, DecodeError> {
        let span = spans::decode_u64();
        let _guard = span.enter();

        let token = raw.trim_ascii();
        let result = if token.len() >= 2 && token[0] == b'"' && token[token.len() - 1] == b'"' {
            serde_json::from_slice::<String>(token)
                .map_err(DecodeError::from)
                .and_then(|literal| Self::parse_literal(&literal))
        } else {
            match std::str::from_utf8(token) {
                Ok(literal) => Self::parse_literal(literal),
                Err(e) => Err(DecodeError::malformed_number(
                    String::from_utf8_lossy(token),
                    e.to_string(),
                )),
            }
        };
        if let Err(e) = &result {
            tracing::debug!(error = %e, "failed to decode u64");
        }
        result
    }

    fn encode_json(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl Serialize for U64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for U64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct U64Visitor;

        impl Visitor<'_> for U64Visitor {
            type Value = U64;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a u64 as a decimal string or a JSON number")
            }

            fn visit_u64<E>(self, v: u64) -> Result<U64, E>
            where
                E: de::Error,
            {
                Ok(U64(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<U64, E>
            where
                E: de::Error,
            {
                u64::try_from(v).map(U64).map_err(|e| {
                    E::custom(DecodeError::malformed_number(v.to_string(), e.to_string()))
                })
            }

            fn visit_u128<E>(self, v: u128) -> Result<U64, E>
            where
                E: de::Error,
            {
                u64::try_from(v).map(U64).map_err(|e| {
                    E::custom(DecodeError::malformed_number(v.to_string(), e.to_string()))
                })
            }

            fn visit_f64<E>(self, v: f64) -> Result<U64, E>
            where
                E: de::Error,
            {
                Err(E::custom(DecodeError::malformed_number(
                    v.to_string(),
                    "number is fractional or out of range",
                )))
            }

            fn visit_str<E>(self, v: &str) -> Result<U64, E>
            where
                E: de::Error,
            {
                U64::parse_literal(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(U64Visitor)
    }
}
