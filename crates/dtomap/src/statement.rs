use crate::Cached;

use dtomap_core::{
    bail, mapper, Entity, Load, Mapping, PreparedStatement, Result, Row, Value,
};

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A prepared statement whose rows load as `T`.
pub struct Statement<S, T> {
    inner: Arc<Cached<S>>,
    _p: PhantomData<fn() -> T>,
}

impl<S: PreparedStatement, T: Load> Statement<S, T> {
    pub(crate) fn new(inner: Arc<Cached<S>>) -> Self {
        Self {
            inner,
            _p: PhantomData,
        }
    }

    pub fn execute(&self, params: &[Value]) -> Result<bool> {
        tracing::trace!(params = params.len(), "executing statement");
        self.inner.statement.execute(params)
    }

    /// Loads the next row of the latest execution.
    pub fn fetch(&self) -> Result<Option<T>> {
        match self.inner.statement.fetch_one()? {
            Some(row) => Ok(Some(self.load(row)?)),
            None => Ok(None),
        }
    }

    /// Loads the remaining rows of the latest execution.
    pub fn fetch_all(&self) -> Result<Vec<T>> {
        self.inner
            .statement
            .fetch_all()?
            .into_iter()
            .map(|row| self.load(row))
            .collect()
    }

    pub fn mapping(&self) -> &Mapping {
        &self.inner.mapping
    }

    fn load(&self, row: Row) -> Result<T> {
        T::load(row, &self.inner.mapping)
    }
}

impl<S: PreparedStatement, T: Entity> Statement<S, T> {
    /// Executes with the stored values of `record` as parameters, in field
    /// order.
    pub fn execute_record(&self, record: &T) -> Result<bool> {
        let Mapping::Entity(meta) = &self.inner.mapping else {
            bail!("statement for `{}` has no entity mapping", std::any::type_name::<T>());
        };

        let params: Vec<Value> = mapper::dehydrate(record, meta)?.into_values().collect();
        self.execute(&params)
    }
}

impl<S: fmt::Debug, T> fmt::Debug for Statement<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("statement", &self.inner.statement)
            .field("mapping", &self.inner.mapping)
            .finish()
    }
}

impl<S, T> Clone for Statement<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _p: PhantomData,
        }
    }
}
