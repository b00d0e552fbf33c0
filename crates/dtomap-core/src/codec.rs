use crate::{Error, Result, Value};

use serde::{de::DeserializeOwned, Serialize};
use std::net::Ipv4Addr;

/// Storage format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A built-in field conversion applied between a record value and its stored
/// form.
///
/// Each codec has a storage half (`to_storage`) and a read half
/// (`from_storage`). Null values pass through both halves unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Date-time stored as `YYYY-MM-DD HH:MM:SS` text.
    Timestamp,

    /// Dotted IPv4 text stored as its unsigned 32-bit integer.
    Ipv4,

    /// Structured value stored as JSON text.
    Json,

    /// Value stored as its text form. Reading is the identity.
    Stringify,

    /// Stored value handed to a constructor on read. Storing is the identity;
    /// the construction itself happens in the derived `Entity` impl.
    Construct,
}

impl Codec {
    /// Converts a record-side value into what the client stores.
    pub fn to_storage(self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        match self {
            Codec::Timestamp => match value {
                Value::Timestamp(ts) => Ok(Value::String(ts.format(TIMESTAMP_FORMAT).to_string())),
                Value::String(_) => Ok(value),
                value => Err(Error::type_conversion(value, "timestamp text")),
            },
            Codec::Ipv4 => match value {
                Value::String(text) => match text.parse::<Ipv4Addr>() {
                    Ok(addr) => Ok(Value::I64(i64::from(u32::from(addr)))),
                    Err(_) => Err(Error::type_conversion(Value::String(text), "IPv4 integer")),
                },
                Value::I64(_) => Ok(value),
                value => Err(Error::type_conversion(value, "IPv4 integer")),
            },
            Codec::Json => match value {
                Value::Json(json) => Ok(Value::String(json.to_string())),
                Value::String(_) => Ok(value),
                value => Err(Error::type_conversion(value, "JSON text")),
            },
            Codec::Stringify => match value.to_text() {
                Some(text) => Ok(Value::String(text)),
                None => Ok(Value::Null),
            },
            Codec::Construct => Ok(value),
        }
    }

    /// Converts a stored value back into its record-side form.
    pub fn from_storage(self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        match self {
            Codec::Timestamp => match value {
                Value::String(text) => {
                    match chrono::NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT) {
                        Ok(ts) => Ok(Value::Timestamp(ts)),
                        Err(_) => Err(Error::type_conversion(Value::String(text), "timestamp")),
                    }
                }
                Value::Timestamp(_) => Ok(value),
                value => Err(Error::type_conversion(value, "timestamp")),
            },
            Codec::Ipv4 => {
                let raw = match value {
                    Value::I64(raw) => raw,
                    Value::String(text) => match text.trim().parse::<i64>() {
                        Ok(raw) => raw,
                        Err(_) => return Err(Error::type_conversion(Value::String(text), "IPv4 address")),
                    },
                    value => return Err(Error::type_conversion(value, "IPv4 address")),
                };

                match u32::try_from(raw) {
                    Ok(bits) => Ok(Value::String(Ipv4Addr::from(bits).to_string())),
                    Err(_) => Err(Error::type_conversion(Value::I64(raw), "IPv4 address")),
                }
            }
            Codec::Json => match value {
                Value::String(text) => Ok(Value::Json(serde_json::from_str(&text)?)),
                Value::Json(_) => Ok(value),
                value => Err(Error::type_conversion(value, "JSON document")),
            },
            Codec::Stringify | Codec::Construct => Ok(value),
        }
    }

    /// Whether the storage half changes values.
    pub fn writes(self) -> bool {
        !matches!(self, Codec::Construct)
    }

    /// Whether the read half changes values.
    pub fn reads(self) -> bool {
        !matches!(self, Codec::Stringify)
    }
}

/// The codecs configured on a single field, one per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCodec {
    pub to_storage: Option<Codec>,
    pub from_storage: Option<Codec>,
}

impl FieldCodec {
    pub const NONE: FieldCodec = FieldCodec {
        to_storage: None,
        from_storage: None,
    };

    /// The same codec in both directions.
    pub const fn both(codec: Codec) -> FieldCodec {
        FieldCodec {
            to_storage: Some(codec),
            from_storage: Some(codec),
        }
    }

    /// Only the storage half.
    pub const fn encode(codec: Codec) -> FieldCodec {
        FieldCodec {
            to_storage: Some(codec),
            from_storage: None,
        }
    }

    /// Only the read half.
    pub const fn decode(codec: Codec) -> FieldCodec {
        FieldCodec {
            to_storage: None,
            from_storage: Some(codec),
        }
    }

    pub fn is_none(&self) -> bool {
        self.to_storage.is_none() && self.from_storage.is_none()
    }

    pub fn apply_to_storage(&self, value: Value) -> Result<Value> {
        match self.to_storage {
            Some(codec) => codec.to_storage(value),
            None => Ok(value),
        }
    }

    pub fn apply_from_storage(&self, value: Value) -> Result<Value> {
        match self.from_storage {
            Some(codec) => codec.from_storage(value),
            None => Ok(value),
        }
    }
}

/// Serializes a structured field for the JSON codec.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(Value::Json(serde_json::to_value(value)?))
}

/// Deserializes a structured field read through the JSON codec.
pub fn decode_json<T: DeserializeOwned>(value: Value) -> Result<T> {
    let json = match value {
        Value::Json(json) => json,
        Value::Null => serde_json::Value::Null,
        Value::String(text) => serde_json::from_str(&text)?,
        value => return Err(Error::type_conversion(value, "JSON document")),
    };

    Ok(serde_json::from_value(json)?)
}
