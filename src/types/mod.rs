// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for node API wire values.
//!
//! This module provides newtype wrappers for the loosely-typed values of the
//! node's JSON API:
//! - u64 values sent as strings or numbers ([`U64`])
//! - Byte sequences sent as hex or base64 ([`HexBytes`])
//! - Event GUIDs ([`EventGuid`]) and the account addresses inside them
//! - Hashes passed through as text ([`HashString`])
//!
//! # Type Relationships
//!
//! ```text
//! EventGuid
//!     |-- creation_number: u64 (wire form: U64)
//!     `-- account_address: AccountAddress
//! ```

mod address;
mod bytes;
mod guid;
mod hash;
mod scalar;

pub use address::AccountAddress;
pub use bytes::HexBytes;
pub use guid::EventGuid;
pub use hash::HashString;
pub use scalar::U64;
