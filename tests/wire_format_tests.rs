// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for decoding and encoding node wire values through the public API
//!
//! These cover the wire examples of the node API: quoted and bare u64s,
//! hex and base64 payloads, and event GUID objects embedded in events.

mod helpers;

use chainwire::{
    AccountAddress, DecodeError, DecodeErrorKind, EventGuid, HashString, HexBytes, WireCodec, U64,
};
use helpers::{guid_json, init_tracing, EVENT_JSON};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Event {
    guid: EventGuid,
    sequence_number: U64,
    #[serde(rename = "type")]
    type_tag: String,
    data: HexBytes,
}

#[test]
fn test_u64_max_boundary() {
    init_tracing();
    let max = U64::decode_json(br#""18446744073709551615""#).unwrap();
    assert_eq!(max.as_u64(), u64::MAX);

    let err = U64::decode_json(br#""18446744073709551616""#).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::MalformedNumber);
}

#[test]
fn test_u64_bare_and_quoted_equal() {
    init_tracing();
    assert_eq!(
        U64::decode_json(b"7").unwrap(),
        U64::decode_json(br#""7""#).unwrap()
    );
    assert_eq!(U64::decode_json(b"42").unwrap().encode_json(), r#""42""#);
}

#[test]
fn test_bytes_hex_and_base64_agree() {
    init_tracing();
    let hex = HexBytes::decode_json(br#""0x12""#).unwrap();
    let b64 = HexBytes::decode_json(br#""Eg==""#).unwrap();
    assert_eq!(hex.as_slice(), &[0x12]);
    assert_eq!(hex, b64);
}

#[test]
fn test_bytes_empty_forms() {
    init_tracing();
    assert!(HexBytes::decode_json(br#""0x""#).unwrap().is_empty());

    let err = HexBytes::decode_json(br#""""#).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedBytes { .. }));
}

#[test]
fn test_guid_decodes_with_address_collaborator() {
    init_tracing();
    let raw = guid_json(r#""3""#, r#""0x1""#);
    let guid = EventGuid::decode_json(raw.as_bytes()).unwrap();

    assert_eq!(guid.creation_number, 3);
    assert_eq!(
        guid.account_address,
        AccountAddress::decode_json(br#""0x1""#).unwrap()
    );
}

#[test]
fn test_guid_missing_either_field() {
    init_tracing();
    for raw in [
        r#"{"creation_number": "3"}"#,
        r#"{"account_address": "0x1"}"#,
        r#"{}"#,
    ] {
        let err = EventGuid::decode_json(raw.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MalformedObject, "input {raw}");
    }
}

#[test]
fn test_guid_requotes_bare_creation_number() {
    init_tracing();
    let raw = guid_json("9", r#""0x1""#);
    let guid = EventGuid::decode_json(raw.as_bytes()).unwrap();
    assert_eq!(
        guid.encode_json(),
        r#"{"creation_number":"9","account_address":"0x1"}"#
    );
}

#[test]
fn test_decode_full_event() -> anyhow::Result<()> {
    init_tracing();
    let event: Event = serde_json::from_str(EVENT_JSON)?;

    assert_eq!(event.guid.creation_number, 4);
    assert_eq!(
        event.guid.account_address.to_string(),
        "0x810026ca8291dd88b5b30a1d3ca2edd683d33d06c4a7f7c451d96f6d47bc5e8b"
    );
    assert_eq!(event.sequence_number.as_u64(), 16);
    assert_eq!(event.type_tag, "0x1::coin::WithdrawEvent");
    assert_eq!(event.data.as_slice(), &[0x12, 0x34, 0x56]);
    Ok(())
}

#[test]
fn test_reencode_full_event_is_canonical() -> anyhow::Result<()> {
    init_tracing();
    let event: Event = serde_json::from_str(EVENT_JSON)?;
    let reencoded = serde_json::to_value(&event)?;

    assert_eq!(reencoded["guid"]["creation_number"], "4");
    assert_eq!(reencoded["sequence_number"], "16");
    assert_eq!(reencoded["data"], "0x123456");

    let again: Event = serde_json::from_value(reencoded)?;
    assert_eq!(again.guid, event.guid);
    assert_eq!(again.data, event.data);
    Ok(())
}

#[test]
fn test_event_with_malformed_guid_fails_whole_decode() {
    init_tracing();
    let raw = EVENT_JSON.replace(r#""creation_number": "4""#, r#""creation_number": "four""#);
    let err = serde_json::from_str::<Event>(&raw).unwrap_err();
    assert!(err.to_string().contains("creation_number"), "{err}");
}

#[test]
fn test_hash_passes_through() {
    init_tracing();
    let raw = br#""0xf4d07fdb8b5151971886a910e516d418a790dd5f6e068b0588066518a395a6""#;
    let hash = HashString::decode_json(raw).unwrap();
    assert_eq!(
        hash.as_str(),
        "0xf4d07fdb8b5151971886a910e516d418a790dd5f6e068b0588066518a395a6"
    );
    assert_eq!(hash.encode_json().as_bytes(), raw);
}

#[test]
fn test_codecs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<U64>();
    assert_send_sync::<HexBytes>();
    assert_send_sync::<EventGuid>();
    assert_send_sync::<HashString>();
    assert_send_sync::<AccountAddress>();
    assert_send_sync::<DecodeError>();
}

#[test]
fn test_concurrent_decoding() {
    init_tracing();
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            std::thread::spawn(move || {
                let raw = guid_json(&i.to_string(), r#""0x1""#);
                EventGuid::decode_json(raw.as_bytes()).map(|g| g.creation_number)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let decoded = handle.join().expect("decoder thread panicked").unwrap();
        assert_eq!(decoded, i as u64);
    }
}
