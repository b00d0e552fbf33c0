use dtomap_core::{EntityMetadata, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    pub projection: Projection,

    /// Key column compared against the single parameter.
    pub key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `*`
    All,

    /// `COUNT(*)`
    Count,
}

impl Select {
    pub fn all(meta: &EntityMetadata) -> Select {
        Select {
            table: meta.table_name.clone(),
            projection: Projection::All,
            key: None,
        }
    }

    pub(super) fn by_key(
        meta: &EntityMetadata,
        projection: Projection,
        operation: &'static str,
    ) -> Result<Select> {
        let identity = meta.require_identity(operation)?;

        Ok(Select {
            table: meta.table_name.clone(),
            projection,
            key: Some(meta.fields[identity.index].schema_name.clone()),
        })
    }
}
