use dtomap_core::{EntityMetadata, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// Assigned columns, in field order.
    pub columns: Vec<String>,

    pub key: String,
}

impl Update {
    pub fn by_key(meta: &EntityMetadata) -> Result<Update> {
        let identity = meta.require_identity("update")?;

        Ok(Update {
            table: meta.table_name.clone(),
            columns: meta
                .columns_without_identity()
                .map(|field| field.schema_name.clone())
                .collect(),
            key: meta.fields[identity.index].schema_name.clone(),
        })
    }
}
