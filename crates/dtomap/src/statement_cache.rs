use dtomap_core::{Mapping, Result};

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Prepared statements keyed by SQL text and the type rows are loaded into.
///
/// Entries live as long as the cache; nothing is evicted.
#[derive(Debug)]
pub struct StatementCache<S> {
    map: RwLock<HashMap<TypeId, HashMap<String, Arc<Cached<S>>>>>,
}

/// A prepared statement and the mapping applied to its rows.
#[derive(Debug)]
pub struct Cached<S> {
    pub statement: S,
    pub mapping: Mapping,
}

impl<S> StatementCache<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, query: &str, ty: TypeId) -> Option<Arc<Cached<S>>> {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&ty).and_then(|by_query| by_query.get(query)).cloned()
    }

    pub fn insert(&self, query: &str, ty: TypeId, cached: Cached<S>) -> Arc<Cached<S>> {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        map.entry(ty)
            .or_default()
            .entry(query.to_string())
            .or_insert_with(|| Arc::new(cached))
            .clone()
    }

    /// Returns the cached statement, preparing it with `prepare` on a miss.
    pub fn prepare_or_reuse(
        &self,
        query: &str,
        ty: TypeId,
        prepare: impl FnOnce() -> Result<Cached<S>>,
    ) -> Result<Arc<Cached<S>>> {
        if let Some(cached) = self.get(query, ty) {
            tracing::trace!(sql = query, "statement cache hit");
            return Ok(cached);
        }

        tracing::debug!(sql = query, "preparing statement");
        let cached = prepare()?;
        Ok(self.insert(query, ty, cached))
    }

    /// Number of cached statements.
    pub fn len(&self) -> usize {
        let map = self.map.read().unwrap_or_else(PoisonError::into_inner);
        map.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> Default for StatementCache<S> {
    fn default() -> Self {
        Self::new()
    }
}
