use dtomap_core::{EntityMetadata, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    pub key: String,
}

impl Delete {
    pub fn by_key(meta: &EntityMetadata) -> Result<Delete> {
        let identity = meta.require_identity("delete")?;

        Ok(Delete {
            table: meta.table_name.clone(),
            key: meta.fields[identity.index].schema_name.clone(),
        })
    }
}
