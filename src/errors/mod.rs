// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the chainwire library.
//!
//! Encoding is total, so the only fallible direction is decoding. All codecs
//! report failures through a single [`DecodeError`], whose variants map to the
//! kind of wire value that was malformed:
//!
//! - [`DecodeError::MalformedNumber`] - a u64 literal that is not base-10 or overflows
//! - [`DecodeError::MalformedBytes`] - a string that is neither hex nor base64
//! - [`DecodeError::MalformedAddress`] - an account address that does not parse
//! - [`DecodeError::MalformedObject`] - a compound value with a missing or bad field
//! - [`DecodeError::InvalidJson`] - input that is not JSON or is the wrong token type
//!
//! # Examples
//!
//! ```rust
//! use chainwire::{DecodeErrorKind, EventGuid, WireCodec};
//!
//! let err = EventGuid::decode_json(br#"{"account_address": "0x1"}"#).unwrap_err();
//! assert_eq!(err.kind(), DecodeErrorKind::MalformedObject);
//! assert_eq!(err.field(), Some("creation_number"));
//! ```

mod decode;

pub use decode::{DecodeError, DecodeErrorKind};
