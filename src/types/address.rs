// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Account address type
//!
//! Addresses are 32 bytes. On the wire they are hex strings, with the
//! leading zeros of small "special" addresses (`0x1` for the framework
//! account, and so on) usually omitted.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{hex, B256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::WireCodec;
use crate::config::constants::{ACCOUNT_ADDRESS_HEX_LEN, ACCOUNT_ADDRESS_LENGTH, HEX_PREFIX};
use crate::errors::DecodeError;
use crate::spans;

/// A 32-byte account address
///
/// Parsing is relaxed: the `0x` prefix is optional and short forms are
/// left-padded with zeros. Formatting prints special addresses (`0x0` to
/// `0xf`) in short form and every other address as the full 64 hex digits.
///
/// # Examples
///
/// ```
/// use chainwire::AccountAddress;
///
/// let one: AccountAddress = "0x1".parse().unwrap();
/// assert_eq!(one, AccountAddress::ONE);
/// assert_eq!(one.to_string(), "0x1");
///
/// let padded: AccountAddress = "0x0000000000000000000000000000000000000000000000000000000000000001"
///     .parse()
///     .unwrap();
/// assert_eq!(padded, one);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AccountAddress(B256);

impl AccountAddress {
    /// The zero address `0x0`
    pub const ZERO: Self = Self(B256::ZERO);

    /// The framework account `0x1`
    pub const ONE: Self = Self(B256::with_last_byte(1));

    /// The token account `0x3`
    pub const THREE: Self = Self(B256::with_last_byte(3));

    /// The object account `0x4`
    pub const FOUR: Self = Self(B256::with_last_byte(4));

    /// Create an address from its raw bytes
    pub const fn new(bytes: [u8; ACCOUNT_ADDRESS_LENGTH]) -> Self {
        Self(B256::new(bytes))
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ADDRESS_LENGTH] {
        &self.0 .0
    }

    /// Whether this is one of the reserved addresses `0x0` to `0xf`
    pub fn is_special(&self) -> bool {
        let bytes = self.as_bytes();
        bytes[..ACCOUNT_ADDRESS_LENGTH - 1].iter().all(|b| *b == 0)
            && bytes[ACCOUNT_ADDRESS_LENGTH - 1] < 0x10
    }

    /// Full 64-digit form, even for special addresses
    pub fn to_long_string(&self) -> String {
        hex::encode_prefixed(self.0)
    }
}

impl From<[u8; ACCOUNT_ADDRESS_LENGTH]> for AccountAddress {
    fn from(bytes: [u8; ACCOUNT_ADDRESS_LENGTH]) -> Self {
        Self::new(bytes)
    }
}

impl From<B256> for AccountAddress {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl From<AccountAddress> for B256 {
    fn from(address: AccountAddress) -> Self {
        address.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_special() {
            write!(f, "{HEX_PREFIX}{:x}", self.as_bytes()[ACCOUNT_ADDRESS_LENGTH - 1])
        } else {
            f.write_str(&self.to_long_string())
        }
    }
}

impl FromStr for AccountAddress {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let span = spans::decode_account_address(s.len());
        let _guard = span.enter();

        let digits = s.strip_prefix(HEX_PREFIX).unwrap_or(s);
        if digits.is_empty() {
            return Err(DecodeError::malformed_address(s, "no hex digits"));
        }
        if digits.len() > ACCOUNT_ADDRESS_HEX_LEN {
            return Err(DecodeError::malformed_address(
                s,
                format!(
                    "{} hex digits exceeds the maximum of {ACCOUNT_ADDRESS_HEX_LEN}",
                    digits.len()
                ),
            ));
        }

        let padded = format!("{digits:0>width$}", width = ACCOUNT_ADDRESS_HEX_LEN);
        let mut bytes = [0u8; ACCOUNT_ADDRESS_LENGTH];
        hex::decode_to_slice(padded, &mut bytes).map_err(|e| {
            tracing::debug!(error = %e, input = s, "failed to parse account address");
            DecodeError::malformed_address(s, e.to_string())
        })?;
        Ok(Self::new(bytes))
    }
}

impl WireCodec for AccountAddress {
    fn decode_value(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => s.parse(),
            other => Err(DecodeError::unexpected_token(
                other,
                "an account address string",
            )),
        }
    }

    fn encode_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn encode_json(&self) -> String {
        format!("\"{self}\"")
    }
}

impl Serialize for AccountAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
