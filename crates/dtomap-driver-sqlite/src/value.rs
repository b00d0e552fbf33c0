use dtomap_core::{codec::TIMESTAMP_FORMAT, Value};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Type, Value as SqlValue, ValueRef},
    Row,
};

/// A dtomap value bound as a statement parameter.
pub(crate) struct Param<'a>(pub(crate) &'a Value);

impl ToSql for Param<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format(TIMESTAMP_FORMAT).to_string(),
            ))),
            Value::Json(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
        }
    }
}

/// A column value read from a SQLite row.
#[derive(Debug)]
pub(crate) struct SqliteValue(Value);

impl SqliteValue {
    pub(crate) fn into_inner(self) -> Value {
        self.0
    }

    /// Reads column `index`. Text and blob columns become strings and must
    /// hold valid UTF-8; anything else is a conversion failure rather than a
    /// lossy string.
    pub(crate) fn from_sql(row: &Row<'_>, index: usize) -> rusqlite::Result<Self> {
        let value = match row.get_ref(index)? {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(v) => Value::I64(v),
            ValueRef::Real(v) => Value::F64(v),
            ValueRef::Text(v) => Value::String(utf8(index, Type::Text, v)?),
            ValueRef::Blob(v) => Value::String(utf8(index, Type::Blob, v)?),
        };

        Ok(SqliteValue(value))
    }
}

fn utf8(index: usize, ty: Type, bytes: &[u8]) -> rusqlite::Result<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(err) => Err(rusqlite::Error::FromSqlConversionFailure(
            index,
            ty,
            Box::new(err),
        )),
    }
}
