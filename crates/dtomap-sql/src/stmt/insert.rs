use dtomap_core::EntityMetadata;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    pub columns: Vec<String>,

    /// Number of value tuples.
    pub rows: usize,
}

impl Insert {
    pub fn with_identity(meta: &EntityMetadata) -> Insert {
        Insert {
            table: meta.table_name.clone(),
            columns: meta
                .fields
                .iter()
                .map(|field| field.schema_name.clone())
                .collect(),
            rows: 1,
        }
    }

    pub fn without_identity(meta: &EntityMetadata, rows: usize) -> Insert {
        Insert {
            table: meta.table_name.clone(),
            columns: meta
                .columns_without_identity()
                .map(|field| field.schema_name.clone())
                .collect(),
            rows,
        }
    }
}
