// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for chainwire codecs
//!
//! The codecs take no runtime configuration: the byte-sniffing decision table
//! and every canonical output form are fixed by the node's wire format. What
//! remains configurable at the source level is collected in [`constants`].
//!
//! ```rust
//! use chainwire::config::constants::{guid_fields, HEX_PREFIX};
//!
//! assert_eq!(HEX_PREFIX, "0x");
//! assert_eq!(guid_fields::CREATION_NUMBER, "creation_number");
//! ```

pub mod constants;
