use crate::{Error, FieldCodec, Result, Value};

/// A mapped field, resolved from its [`FieldDef`](super::FieldDef).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Column name in the table.
    pub schema_name: String,

    /// Field name in the struct.
    pub native_name: &'static str,

    pub is_identity: bool,

    pub nullable: bool,

    pub codec: FieldCodec,
}

/// Position and kind of an entity's identity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// Index into [`EntityMetadata::fields`](super::EntityMetadata::fields).
    pub index: usize,

    pub ty: IdentityType,
}

/// Types an identity field may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityType {
    Integer,
    String,
}

impl IdentityType {
    /// Classifies a declared type, looking through `Option<..>`.
    pub fn classify(ty: &str) -> Option<IdentityType> {
        let compact: String = ty.chars().filter(|c| !c.is_whitespace()).collect();

        let mut inner = &compact[..];
        for prefix in ["Option<", "std::option::Option<", "core::option::Option<"] {
            if let Some(rest) = inner.strip_prefix(prefix) {
                inner = rest.strip_suffix('>').unwrap_or(rest);
                break;
            }
        }

        let name = inner.rsplit("::").next().unwrap_or(inner);

        match name {
            "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" => Some(IdentityType::Integer),
            "String" => Some(IdentityType::String),
            _ => None,
        }
    }

    /// Converts a generated identifier, as reported by the client, into a
    /// value for the identity field.
    pub fn coerce(self, raw: String) -> Result<Value> {
        match self {
            IdentityType::Integer => match raw.trim().parse::<i64>() {
                Ok(id) => Ok(Value::I64(id)),
                Err(_) => Err(Error::type_conversion(Value::String(raw), "integer identity")),
            },
            IdentityType::String => Ok(Value::String(raw)),
        }
    }
}
