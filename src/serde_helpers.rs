// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! `#[serde(with = "...")]` helpers for plain std fields.
//!
//! These let response structs keep `u64` and `Vec<u8>` fields while still
//! using the tolerant wire codecs.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(with = "chainwire::serde_helpers::u64_string")]
//!     sequence_number: u64,
//!     #[serde(with = "chainwire::serde_helpers::hex_bytes")]
//!     data: Vec<u8>,
//! }
//!
//! let event: Event = serde_json::from_str(r#"{"sequence_number": 9, "data": "AQ=="}"#).unwrap();
//! assert_eq!(event.sequence_number, 9);
//! assert_eq!(event.data, vec![1]);
//! assert_eq!(
//!     serde_json::to_string(&event).unwrap(),
//!     r#"{"sequence_number":"9","data":"0x01"}"#
//! );
//! ```

/// `u64` as a quoted decimal string, accepting bare numbers on input
pub mod u64_string {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::types::U64;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        U64::new(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        U64::deserialize(deserializer).map(u64::from)
    }
}

/// `Vec<u8>` as `0x` hex, accepting hex or base64 on input
pub mod hex_bytes {
    use alloy_primitives::hex;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::HexBytes;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode_prefixed(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        HexBytes::deserialize(deserializer).map(HexBytes::into_vec)
    }
}
