// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tolerant JSON wire codecs for blockchain node RPC values.
//!
//! Node APIs send the same logical value in more than one JSON shape: u64s as
//! strings or numbers, byte payloads as hex or base64. The types in this crate
//! accept every shape the node uses and always write back a single canonical
//! form, so values round-trip by content even when their text does not.
//!
//! | Type | Accepts | Writes |
//! |------|---------|--------|
//! | [`U64`] | `"42"`, `42` | `"42"` |
//! | [`HexBytes`] | `"0x1234"`, `"1234"`, `"EjQ="` | `"0x1234"` |
//! | [`EventGuid`] | `{"creation_number": .., "account_address": ..}` | same, number quoted |
//! | [`HashString`] | any string | the same string |
//!
//! Every type implements [`WireCodec`] for raw-token decoding and serde's
//! `Serialize`/`Deserialize` for use inside larger response structs.
//!
//! All codecs are pure functions of their input and can be used from any
//! number of threads at once.
//!
//! # Example
//!
//! ```rust
//! use chainwire::{EventGuid, HexBytes, WireCodec, U64};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Event {
//!     guid: EventGuid,
//!     sequence_number: U64,
//!     data: HexBytes,
//! }
//!
//! let event: Event = serde_json::from_str(
//!     r#"{
//!         "guid": {"creation_number": "2", "account_address": "0x1"},
//!         "sequence_number": 17,
//!         "data": "EjRW"
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(event.guid.creation_number, 2);
//! assert_eq!(event.sequence_number.as_u64(), 17);
//! assert_eq!(event.data.encode_json(), r#""0x123456""#);
//! ```

mod codec;
pub mod config;
pub mod errors;
pub mod serde_helpers;
mod spans;
pub mod types;

pub use codec::WireCodec;
pub use errors::{DecodeError, DecodeErrorKind};
pub use types::*;
