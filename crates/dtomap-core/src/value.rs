use crate::{codec::TIMESTAMP_FORMAT, Error, Result};

use chrono::NaiveDateTime;
use std::net::Ipv4Addr;

/// A dynamically typed value exchanged with the database client.
///
/// `Null`, `Bool`, `I64`, `F64` and `String` are what clients send and
/// receive. `Timestamp` and `Json` only exist on the record side of a codec:
/// the timestamp and JSON codecs turn them into text before a value reaches
/// the client.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Date and time without a time zone
    Timestamp(NaiveDateTime),

    /// Structured JSON document
    Json(serde_json::Value),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when the value does not identify a stored row: null,
    /// integer zero or the empty string.
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Null => true,
            Self::I64(v) => *v == 0,
            Self::String(v) => v.is_empty(),
            _ => false,
        }
    }

    /// Textual form of the value, `None` for null.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) => Some(String::new()),
            Self::I64(v) => Some(v.to_string()),
            Self::F64(v) => Some(v.to_string()),
            Self::String(v) => Some(v.clone()),
            Self::Timestamp(v) => Some(v.format(TIMESTAMP_FORMAT).to_string()),
            Self::Json(v) => Some(v.to_string()),
        }
    }

    pub(crate) fn ty_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Timestamp(_) => "Timestamp",
            Self::Json(_) => "Json",
        }
    }
}

/// Conversion from a record field into a [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Conversion from a [`Value`] into a record field.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self>;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

macro_rules! impl_integer {
    ( $($t:ty),+ ) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::I64(i64::from(*self))
                }
            }

            impl FromValue for $t {
                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => <$t>::try_from(v)
                            .map_err(|_| Error::type_conversion(Value::I64(v), stringify!($t))),
                        Value::Bool(v) => Ok(<$t>::from(v)),
                        Value::String(v) => match v.trim().parse::<$t>() {
                            Ok(parsed) => Ok(parsed),
                            Err(_) => Err(Error::type_conversion(Value::String(v), stringify!($t))),
                        },
                        value => Err(Error::type_conversion(value, stringify!($t))),
                    }
                }
            }

            impl From<$t> for Value {
                fn from(src: $t) -> Value {
                    src.to_value()
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32);

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            Value::String(v) => match v.trim().parse::<f64>() {
                Ok(parsed) => Ok(parsed),
                Err(_) => Err(Error::type_conversion(Value::String(v), "f64")),
            },
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::F64(f64::from(*self))
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I64(v) => Ok(v != 0),
            Value::String(v) => match &v[..] {
                "1" | "true" => Ok(true),
                "0" | "false" | "" => Ok(false),
                _ => Err(Error::type_conversion(Value::String(v), "bool")),
            },
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::I64(v) => Ok(v.to_string()),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl FromValue for NaiveDateTime {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            Value::String(v) => match NaiveDateTime::parse_from_str(&v, TIMESTAMP_FORMAT) {
                Ok(parsed) => Ok(parsed),
                Err(_) => Err(Error::type_conversion(Value::String(v), "NaiveDateTime")),
            },
            value => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}

impl ToValue for Ipv4Addr {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl FromValue for Ipv4Addr {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => match v.parse::<Ipv4Addr>() {
                Ok(addr) => Ok(addr),
                Err(_) => Err(Error::type_conversion(Value::String(v), "Ipv4Addr")),
            },
            Value::I64(v) => u32::try_from(v)
                .map(Ipv4Addr::from)
                .map_err(|_| Error::type_conversion(Value::I64(v), "Ipv4Addr")),
            value => Err(Error::type_conversion(value, "Ipv4Addr")),
        }
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::Json(self.clone())
    }
}

impl FromValue for serde_json::Value {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Json(v) => Ok(v),
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(v) => Ok(v.into()),
            Value::I64(v) => Ok(v.into()),
            Value::String(v) => Ok(serde_json::from_str(&v)?),
            value => Err(Error::type_conversion(value, "serde_json::Value")),
        }
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Value {
        Value::F64(src)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Value {
        Value::Bool(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Value {
        Value::String(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Value {
        Value::Timestamp(src)
    }
}

impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Value {
        Value::Json(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Value {
        match src {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
