// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for chainwire integration tests
//!
//! Provides fixtures shaped like real node responses and a tracing
//! subscriber for inspecting decode spans with `RUST_LOG=chainwire=trace`.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A V1 event as returned inside a transaction's `events` list
pub const EVENT_JSON: &str = r#"{
    "guid": {
        "creation_number": "4",
        "account_address": "0x810026ca8291dd88b5b30a1d3ca2edd683d33d06c4a7f7c451d96f6d47bc5e8b"
    },
    "sequence_number": "16",
    "type": "0x1::coin::WithdrawEvent",
    "data": "EjRW"
}"#;

/// Build the raw JSON of an event GUID object
pub fn guid_json(creation_number: &str, account_address: &str) -> String {
    format!(
        r#"{{"creation_number": {creation_number}, "account_address": {account_address}}}"#
    )
}
