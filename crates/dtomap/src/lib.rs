mod connect;
pub use connect::{ConnectOptions, DEFAULT_URL_VAR};

mod connection;
pub use connection::Connection;

mod persist;
pub use persist::PersistAction;

mod statement;
pub use statement::Statement;

mod statement_cache;
pub use statement_cache::{Cached, StatementCache};

pub use dtomap_core::{
    bail, codec, driver, err, mapper, row, schema, Client, Codec, Entity, EntityDef,
    EntityMetadata, Error, FieldCodec, FieldDef, FromValue, Load, Mapping, MetadataCache,
    Naming, PreparedStatement, Primitive, Result, Row, ToValue, Value, Values,
};
pub use dtomap_macros::Entity;
pub use dtomap_sql::Dialect;

#[doc(hidden)]
pub mod codegen_support {
    pub use dtomap_core::codec::{decode_json, encode_json};
    pub use dtomap_core::{
        Codec, Entity, EntityDef, Error, FieldCodec, FieldDef, FromValue, Naming, Result,
        ToValue, Value, Values,
    };
}
