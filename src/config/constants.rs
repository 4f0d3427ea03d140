// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wire-format constants
//!
//! This module centralizes the literal tokens and field names of the node's
//! JSON wire format so the codecs and their tests agree on a single source.

/// Prefix marking a hex-encoded string on the wire.
pub const HEX_PREFIX: &str = "0x";

/// Standard base64 padding character.
///
/// A string ending in this character (and not starting with [`HEX_PREFIX`])
/// is decoded as base64 without first trying hex.
pub const BASE64_PADDING: char = '=';

/// Length of an account address in bytes
pub const ACCOUNT_ADDRESS_LENGTH: usize = 32;

/// Number of hex digits in the long form of an account address
pub const ACCOUNT_ADDRESS_HEX_LEN: usize = ACCOUNT_ADDRESS_LENGTH * 2;

/// Number of hex digits in a 32-byte hash, excluding any prefix
pub const HASH_HEX_LEN: usize = 64;

/// Field names of the event GUID object
pub mod guid_fields {
    /// Sequence number of the GUID, encoded as a u64 string
    pub const CREATION_NUMBER: &str = "creation_number";

    /// Address of the account that created the GUID
    pub const ACCOUNT_ADDRESS: &str = "account_address";
}
