use crate::{bail, mapper, Entity, EntityMetadata, FromValue, MetadataCache, Primitive, Result, Row};

use std::sync::Arc;

/// How rows of a query are turned into results.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapping {
    /// Rows hydrate records through entity metadata.
    Entity(Arc<EntityMetadata>),

    /// The first column of each row is cast to a scalar.
    Primitive(Primitive),
}

/// A type query results can be loaded into: an [`Entity`] or one of the
/// primitive scalars `bool`, `i64`, `f64` and `String`.
pub trait Load: Sized + 'static {
    /// Resolves the mapping used for every row of a statement.
    fn mapping(cache: &MetadataCache) -> Result<Mapping>;

    fn load(row: Row, mapping: &Mapping) -> Result<Self>;
}

impl<T: Entity> Load for T {
    fn mapping(cache: &MetadataCache) -> Result<Mapping> {
        cache.get::<T>().map(Mapping::Entity)
    }

    fn load(row: Row, mapping: &Mapping) -> Result<Self> {
        match mapping {
            Mapping::Entity(meta) => mapper::hydrate(row, meta),
            Mapping::Primitive(primitive) => {
                bail!("cannot load entity `{}` as {primitive:?}", std::any::type_name::<T>())
            }
        }
    }
}

macro_rules! impl_load_primitive {
    ( $( $ty:ty => $primitive:ident ),+ ) => {
        $(
            impl Load for $ty {
                fn mapping(_cache: &MetadataCache) -> Result<Mapping> {
                    Ok(Mapping::Primitive(Primitive::$primitive))
                }

                fn load(row: Row, mapping: &Mapping) -> Result<Self> {
                    let primitive = match mapping {
                        Mapping::Primitive(primitive) => *primitive,
                        Mapping::Entity(_) => Primitive::$primitive,
                    };
                    <$ty>::from_value(primitive.cast_row(&row))
                }
            }
        )+
    };
}

impl_load_primitive!(bool => Bool, i64 => Integer, f64 => Float, String => String);
