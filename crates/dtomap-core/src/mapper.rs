use crate::{bail, err, Entity, EntityMetadata, Error, Result, Row, Value, Values};

/// Builds a record from a fetched row.
///
/// Each mapped field reads its column, applies its read codec and is handed
/// to [`Entity::from_values`]. A missing column loads as null for nullable
/// fields and fails otherwise. Columns without a field are ignored.
pub fn hydrate<T: Entity>(mut row: Row, meta: &EntityMetadata) -> Result<T> {
    let mut values = Vec::with_capacity(meta.fields.len());

    for field in &meta.fields {
        let value = match row.remove(&field.schema_name) {
            Some(value) => field.codec.apply_from_storage(value).map_err(|err| {
                err.context(err!(
                    "failed to read column `{}` of `{}`",
                    field.schema_name,
                    meta.table_name
                ))
            })?,
            None if field.nullable => Value::Null,
            None => {
                return Err(Error::missing_field(
                    meta.entity_name(),
                    field.schema_name.clone(),
                ))
            }
        };

        values.push(value);
    }

    T::from_values(Values::new(meta.type_name, values))
}

/// Turns a record into a row of stored values, keyed by column name in
/// field order.
pub fn dehydrate<T: Entity>(record: &T, meta: &EntityMetadata) -> Result<Row> {
    let values = record.to_values()?;

    if values.len() != meta.fields.len() {
        bail!(
            "`{}` produced {} values for {} mapped fields",
            meta.entity_name(),
            values.len(),
            meta.fields.len()
        );
    }

    let mut row = Row::new();

    for (field, value) in meta.fields.iter().zip(values) {
        let value = field.codec.apply_to_storage(value).map_err(|err| {
            err.context(err!(
                "failed to store field `{}.{}`",
                meta.entity_name(),
                field.native_name
            ))
        })?;

        row.insert(field.schema_name.clone(), value);
    }

    Ok(row)
}
