// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for decode operations.
//!
//! Telemetry is kept out of the codec bodies: each decode entry point opens
//! the span returned by its helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn decode_thing(input: &str) -> Result<Thing, DecodeError> {
//!     let span = spans::decode_thing(input.len());
//!     let _guard = span.enter();
//!     // Decoding logic here
//! }
//! ```
//!
//! All spans are at TRACE level; decoding runs per field of every RPC
//! response, so anything louder would drown the caller's own spans.

use tracing::Span;

/// Create span for decoding a u64 from a JSON string or number.
#[inline]
pub(crate) fn decode_u64() -> Span {
    tracing::trace_span!("chainwire.decode_u64")
}

/// Create span for decoding bytes from a hex or base64 string.
#[inline]
pub(crate) fn decode_bytes(input_len: usize) -> Span {
    tracing::trace_span!("chainwire.decode_bytes", input_len = input_len)
}

/// Create span for parsing an account address.
#[inline]
pub(crate) fn decode_account_address(input_len: usize) -> Span {
    tracing::trace_span!("chainwire.decode_account_address", input_len = input_len)
}

/// Create span for decoding an event GUID object.
///
/// Children: decode_u64 and decode_account_address spans for its fields
#[inline]
pub(crate) fn decode_event_guid() -> Span {
    tracing::trace_span!("chainwire.decode_event_guid")
}
