#[macro_use]
mod macros;

pub mod codec;
pub use codec::{Codec, FieldCodec};

pub mod driver;
pub use driver::{Client, PreparedStatement};

mod entity;
pub use entity::{Entity, Values};

mod error;
pub use error::{Error, IntoError};

mod load;
pub use load::{Load, Mapping};

pub mod mapper;

mod naming;
pub use naming::{snake_case, Naming};

mod primitive;
pub use primitive::Primitive;

mod row;
pub use row::Row;

pub mod schema;
pub use schema::{EntityDef, EntityMetadata, FieldDef, MetadataCache};

mod value;
pub use value::{FromValue, ToValue, Value};

/// A Result type alias that uses dtomap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
