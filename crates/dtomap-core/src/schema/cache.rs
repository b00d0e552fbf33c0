use super::EntityMetadata;
use crate::{Entity, Result};

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Memoizes [`EntityMetadata`] per record type.
///
/// Entries are never evicted. Two threads asking for the same type for the
/// first time may both build it; the first insert is kept.
#[derive(Debug, Default)]
pub struct MetadataCache {
    entries: RwLock<HashMap<TypeId, Arc<EntityMetadata>>>,
}

impl MetadataCache {
    pub fn new() -> MetadataCache {
        MetadataCache::default()
    }

    pub fn get<T: Entity>(&self) -> Result<Arc<EntityMetadata>> {
        let key = TypeId::of::<T>();

        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(meta) = entries.get(&key) {
                return Ok(meta.clone());
            }
        }

        let meta = Arc::new(EntityMetadata::of::<T>()?);

        tracing::debug!(
            entity = meta.entity_name(),
            table = %meta.table_name,
            fields = meta.fields.len(),
            identity = ?meta.identity_field().map(|field| &field.schema_name),
            "built entity metadata"
        );

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.entry(key).or_insert(meta).clone())
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
