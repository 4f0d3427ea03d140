// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event GUID type

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::codec::WireCodec;
use crate::config::constants::guid_fields::{ACCOUNT_ADDRESS, CREATION_NUMBER};
use crate::errors::DecodeError;
use crate::spans;
use crate::types::{AccountAddress, U64};

const OBJECT_NAME: &str = "EventGuid";

/// GUID of a V1 event: the creating account plus a per-account sequence number
///
/// Wire form:
///
/// ```json
/// {"creation_number": "5", "account_address": "0x1"}
/// ```
///
/// `creation_number` may be a string or a bare number on the way in and is
/// always a string on the way out. Unknown fields are ignored.
///
/// **Only use this for the `guid` of entries in a transaction's `events`
/// list.** The GUID resource that appears in a transaction's `changes` has a
/// different shape and will not decode as this type.
///
/// # Examples
///
/// ```
/// use chainwire::{AccountAddress, EventGuid, WireCodec};
///
/// let guid = EventGuid::decode_json(br#"{"creation_number": 3, "account_address": "0x1"}"#).unwrap();
/// assert_eq!(guid.creation_number, 3);
/// assert_eq!(guid.account_address, AccountAddress::ONE);
/// assert_eq!(
///     guid.encode_json(),
///     r#"{"creation_number":"3","account_address":"0x1"}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventGuid {
    /// Sequence number of the GUID within its creator account
    pub creation_number: u64,
    /// Account that created the GUID
    pub account_address: AccountAddress,
}

impl EventGuid {
    /// Create a GUID from its parts
    pub const fn new(creation_number: u64, account_address: AccountAddress) -> Self {
        Self {
            creation_number,
            account_address,
        }
    }
}

fn required_field<T: WireCodec>(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<T, DecodeError> {
    let value = object
        .get(field)
        .ok_or_else(|| DecodeError::missing_field(OBJECT_NAME, field))?;
    T::decode_value(value).map_err(|e| DecodeError::invalid_field(OBJECT_NAME, field, e))
}

impl WireCodec for EventGuid {
    fn decode_value(value: &Value) -> Result<Self, DecodeError> {
        let span = spans::decode_event_guid();
        let _guard = span.enter();

        let object = value
            .as_object()
            .ok_or_else(|| DecodeError::not_an_object(OBJECT_NAME, value))?;

        let creation_number: U64 = required_field(object, CREATION_NUMBER)?;
        let account_address: AccountAddress = required_field(object, ACCOUNT_ADDRESS)?;

        Ok(Self::new(creation_number.into(), account_address))
    }

    fn encode_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            CREATION_NUMBER.to_string(),
            U64::new(self.creation_number).encode_value(),
        );
        object.insert(
            ACCOUNT_ADDRESS.to_string(),
            self.account_address.encode_value(),
        );
        Value::Object(object)
    }

    /// Encode with `creation_number` first, then `account_address`.
    ///
    /// [`Map`] does not preserve insertion order without serde_json's
    /// `preserve_order` feature, so the object text is built directly.
    fn encode_json(&self) -> String {
        format!(
            "{{\"{CREATION_NUMBER}\":{},\"{ACCOUNT_ADDRESS}\":{}}}",
            U64::new(self.creation_number).encode_json(),
            self.account_address.encode_json(),
        )
    }
}

impl Serialize for EventGuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct(OBJECT_NAME, 2)?;
        state.serialize_field(CREATION_NUMBER, &U64::new(self.creation_number))?;
        state.serialize_field(ACCOUNT_ADDRESS, &self.account_address)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for EventGuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::decode_value(&value).map_err(serde::de::Error::custom)
    }
}
