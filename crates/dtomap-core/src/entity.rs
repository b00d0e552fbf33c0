use crate::{err, EntityDef, Error, FromValue, Result, Value};

/// A record type mapped to a table row.
///
/// Implemented by `#[derive(Entity)]`. Values passed to and returned from
/// these methods follow the order of the mapped (non-ignored) fields in
/// [`definition`](Entity::definition), before any codec is applied.
pub trait Entity: Sized + 'static {
    /// Describes the table and fields of this type.
    fn definition() -> EntityDef;

    /// Values of the mapped fields, in declaration order.
    fn to_values(&self) -> Result<Vec<Value>>;

    /// Builds a record from values of the mapped fields. Ignored fields take
    /// their default.
    fn from_values(values: Values) -> Result<Self>;

    /// Assigns a generated identifier to the identity field.
    fn set_identity(&mut self, value: Value) -> Result<()>;
}

/// Field values handed to [`Entity::from_values`], consumed in field order.
#[derive(Debug)]
pub struct Values {
    entity: &'static str,
    iter: std::vec::IntoIter<Value>,
}

impl Values {
    pub fn new(entity: &'static str, values: Vec<Value>) -> Values {
        Values {
            entity,
            iter: values.into_iter(),
        }
    }

    /// Takes the value for `field`.
    pub fn next_field(&mut self, field: &str) -> Result<Value> {
        self.iter
            .next()
            .ok_or_else(|| Error::missing_field(self.entity, field))
    }

    /// Takes the value for `field` and converts it.
    pub fn decode<T: FromValue>(&mut self, field: &str) -> Result<T> {
        let value = self.next_field(field)?;
        T::from_value(value).map_err(|err| {
            err.context(err!("failed to decode field `{}.{field}`", self.entity))
        })
    }

    pub fn len(&self) -> usize {
        self.iter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
