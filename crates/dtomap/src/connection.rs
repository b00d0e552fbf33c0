use crate::{Cached, ConnectOptions, PersistAction, Statement, StatementCache};

use dtomap_core::{
    mapper, schema::Identity, Client, Entity, EntityMetadata, Error, Load, MetadataCache,
    Result, ToValue, Value,
};
use dtomap_sql::{self as sql, Dialect, Serializer};

use std::any::TypeId;
use std::sync::Arc;

/// Maps records to table rows over a database client.
///
/// Metadata and prepared statements are cached per connection for as long as
/// it lives.
#[derive(Debug)]
pub struct Connection<C: Client> {
    client: C,

    serializer: Serializer,

    metadata: MetadataCache,

    statements: StatementCache<C::Statement>,
}

impl<C: Client> Connection<C> {
    pub fn from_client(client: C, dialect: Dialect) -> Connection<C> {
        Connection {
            client,
            serializer: Serializer::new(dialect),
            metadata: MetadataCache::new(),
            statements: StatementCache::new(),
        }
    }

    /// Parses `url` and builds the client with `connect`.
    pub fn connect(
        url: &str,
        connect: impl FnOnce(&ConnectOptions) -> Result<C>,
    ) -> Result<Connection<C>> {
        let options = ConnectOptions::parse(url)?;
        Self::with_options(&options, connect)
    }

    /// Like [`connect`](Self::connect), reading the URL from the environment
    /// variable `var`.
    pub fn from_env(
        var: &str,
        connect: impl FnOnce(&ConnectOptions) -> Result<C>,
    ) -> Result<Connection<C>> {
        let options = ConnectOptions::from_env(var)?;
        Self::with_options(&options, connect)
    }

    fn with_options(
        options: &ConnectOptions,
        connect: impl FnOnce(&ConnectOptions) -> Result<C>,
    ) -> Result<Connection<C>> {
        tracing::debug!(dsn = %options.dsn, dialect = ?options.dialect, "connecting");
        let client = connect(options)?;
        Ok(Connection::from_client(client, options.dialect))
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn dialect(&self) -> Dialect {
        self.serializer.dialect()
    }

    /// Metadata for `T`, built on first use.
    pub fn metadata<T: Entity>(&self) -> Result<Arc<EntityMetadata>> {
        self.metadata.get::<T>()
    }

    pub fn statement_cache(&self) -> &StatementCache<C::Statement> {
        &self.statements
    }

    /// Prepares `sql`, or reuses the statement prepared earlier for the same
    /// text and result type.
    pub fn prepare<T: Load>(&self, sql: &str) -> Result<Statement<C::Statement, T>> {
        let cached = self
            .statements
            .prepare_or_reuse(sql, TypeId::of::<T>(), || {
                Ok(Cached {
                    mapping: T::mapping(&self.metadata)?,
                    statement: self.client.prepare(sql)?,
                })
            })?;

        Ok(Statement::new(cached))
    }

    /// Runs `sql` with `params` and loads every row.
    pub fn query<T: Load>(&self, sql: &str, params: &[Value]) -> Result<Vec<T>> {
        let stmt = self.prepare::<T>(sql)?;
        stmt.execute(params)?;
        stmt.fetch_all()
    }

    /// Loads the record whose identity is `id`.
    pub fn get<T: Entity>(&self, id: impl ToValue) -> Result<Option<T>> {
        let meta = self.metadata::<T>()?;
        let identity = meta.require_identity("get")?;
        let id = self.identity_param(&meta, identity, id.to_value(), "get")?;

        let stmt = self.prepare::<T>(&self.sql(&sql::Statement::select_by_key(&meta)?))?;
        stmt.execute(&[id])?;
        stmt.fetch()
    }

    /// Loads every record of the table.
    pub fn get_all<T: Entity>(&self) -> Result<Vec<T>> {
        let meta = self.metadata::<T>()?;

        let stmt = self.prepare::<T>(&self.sql(&sql::Statement::select_all(&meta)))?;
        stmt.execute(&[])?;
        stmt.fetch_all()
    }

    /// Inserts `record`.
    ///
    /// When the type has an identity and the record's identity is unset, the
    /// identity column is left to the database and the generated identifier is
    /// assigned back to the record.
    pub fn insert<T: Entity>(&self, record: &mut T) -> Result<bool> {
        let meta = self.metadata::<T>()?;
        let values = self.stored_values(record, &meta)?;

        match meta.identity {
            Some(identity) if values[identity.index].is_unset() => {
                self.insert_generated(record, &meta, identity, values)
            }
            _ => self.insert_with_key::<T>(&meta, values),
        }
    }

    /// Updates the row holding `record`'s identity.
    pub fn update<T: Entity>(&self, record: &T) -> Result<bool> {
        let meta = self.metadata::<T>()?;
        let identity = meta.require_identity("update")?;
        let values = self.stored_values(record, &meta)?;

        if values[identity.index].is_unset() {
            return Err(Error::null_identity(meta.entity_name(), "update"));
        }

        self.update_existing::<T>(&meta, identity, values)
    }

    /// Updates `record` when a row holds its identity, inserts it otherwise.
    ///
    /// The existence check and the write are separate statements; wrap the
    /// call in a transaction when that matters.
    pub fn persist<T: Entity>(&self, record: &mut T) -> Result<bool> {
        let meta = self.metadata::<T>()?;
        let identity = meta.require_identity("persist")?;
        let values = self.stored_values(record, &meta)?;

        let action = PersistAction::decide(&values[identity.index], || {
            self.count_by_key(&meta, values[identity.index].clone())
        })?;

        tracing::debug!(entity = meta.entity_name(), ?action, "persisting record");

        match action {
            PersistAction::UpdateExisting => self.update_existing::<T>(&meta, identity, values),
            PersistAction::InsertWithKey => self.insert_with_key::<T>(&meta, values),
            PersistAction::InsertGenerated => self.insert_generated(record, &meta, identity, values),
        }
    }

    /// Deletes the row holding `record`'s identity.
    pub fn delete<T: Entity>(&self, record: &T) -> Result<bool> {
        let meta = self.metadata::<T>()?;
        let identity = meta.require_identity("delete")?;
        let mut values = self.stored_values(record, &meta)?;
        let id = values.swap_remove(identity.index);

        if id.is_unset() {
            return Err(Error::null_identity(meta.entity_name(), "delete"));
        }

        self.delete_key::<T>(&meta, id)
    }

    /// Deletes the row of `T` whose identity is `id`.
    pub fn delete_by_id<T: Entity>(&self, id: impl ToValue) -> Result<bool> {
        let meta = self.metadata::<T>()?;
        let identity = meta.require_identity("delete")?;
        let id = self.identity_param(&meta, identity, id.to_value(), "delete")?;

        self.delete_key::<T>(&meta, id)
    }

    /// Inserts `records` with one multi-row statement per chunk of
    /// `chunk_size` records. Identities are left to the database and are not
    /// assigned back.
    pub fn insert_bulk<T: Entity>(&self, records: &[T], chunk_size: usize) -> Result<bool> {
        let meta = self.metadata::<T>()?;

        if chunk_size == 0 {
            return Err(Error::invalid_chunk_size(meta.entity_name()));
        }

        let mut ret = true;

        for chunk in records.chunks(chunk_size) {
            let mut params = Vec::with_capacity(chunk.len() * meta.fields.len());

            for record in chunk {
                let values = self.stored_values(record, &meta)?;
                params.extend(
                    meta.fields
                        .iter()
                        .zip(values)
                        .filter(|(field, _)| !field.is_identity)
                        .map(|(_, value)| value),
                );
            }

            let sql = self.sql(&sql::Statement::bulk_insert_without_identity(
                &meta,
                chunk.len(),
            ));

            tracing::debug!(
                entity = meta.entity_name(),
                records = chunk.len(),
                "bulk inserting chunk"
            );

            ret &= self.execute::<T>(&sql, &params)?;
        }

        Ok(ret)
    }

    pub fn begin_transaction(&self) -> Result<bool> {
        self.client.begin_transaction()
    }

    pub fn commit(&self) -> Result<bool> {
        self.client.commit()
    }

    pub fn rollback(&self) -> Result<bool> {
        self.client.rollback()
    }

    pub fn last_insert_id(&self) -> Result<String> {
        self.client.last_insert_id()
    }

    pub fn error_code(&self) -> Option<String> {
        self.client.error_code()
    }

    pub fn error_info(&self) -> Vec<String> {
        self.client.error_info()
    }

    fn sql(&self, stmt: &sql::Statement) -> String {
        self.serializer.serialize(stmt)
    }

    /// Stored values of `record`, in field order.
    fn stored_values<T: Entity>(&self, record: &T, meta: &EntityMetadata) -> Result<Vec<Value>> {
        Ok(mapper::dehydrate(record, meta)?.into_values().collect())
    }

    /// Applies the identity field's storage codec to a caller-supplied id.
    ///
    /// An explicit id is only rejected when it is `NULL`. Zero and the empty
    /// string are real keys here, unlike in a record's identity field where
    /// they mean "not yet assigned".
    fn identity_param(
        &self,
        meta: &EntityMetadata,
        identity: Identity,
        id: Value,
        operation: &'static str,
    ) -> Result<Value> {
        let id = meta.fields[identity.index].codec.apply_to_storage(id)?;

        if id.is_null() {
            return Err(Error::null_identity(meta.entity_name(), operation));
        }

        Ok(id)
    }

    fn count_by_key(&self, meta: &EntityMetadata, id: Value) -> Result<i64> {
        let stmt = self.prepare::<i64>(&self.sql(&sql::Statement::count_by_key(meta)?))?;
        stmt.execute(&[id])?;
        Ok(stmt.fetch()?.unwrap_or(0))
    }

    fn insert_with_key<T: Entity>(&self, meta: &EntityMetadata, values: Vec<Value>) -> Result<bool> {
        let sql = self.sql(&sql::Statement::insert_with_identity(meta));
        self.execute::<T>(&sql, &values)
    }

    fn insert_generated<T: Entity>(
        &self,
        record: &mut T,
        meta: &EntityMetadata,
        identity: Identity,
        mut values: Vec<Value>,
    ) -> Result<bool> {
        values.remove(identity.index);

        let sql = self.sql(&sql::Statement::insert_without_identity(meta));
        let ret = self.execute::<T>(&sql, &values)?;

        let raw = self.client.last_insert_id()?;
        let id = identity.ty.coerce(raw)?;

        tracing::debug!(entity = meta.entity_name(), id = ?id, "assigning generated identity");
        record.set_identity(id)?;

        Ok(ret)
    }

    fn update_existing<T: Entity>(
        &self,
        meta: &EntityMetadata,
        identity: Identity,
        mut values: Vec<Value>,
    ) -> Result<bool> {
        // SET columns first, the key last
        let id = values.remove(identity.index);
        values.push(id);

        let sql = self.sql(&sql::Statement::update(meta)?);
        self.execute::<T>(&sql, &values)
    }

    fn delete_key<T: Entity>(&self, meta: &EntityMetadata, id: Value) -> Result<bool> {
        let sql = self.sql(&sql::Statement::delete(meta)?);
        self.execute::<T>(&sql, &[id])
    }

    /// Executes a statement that returns no rows, cached under the record type.
    fn execute<T: Entity>(&self, sql: &str, params: &[Value]) -> Result<bool> {
        self.prepare::<T>(sql)?.execute(params)
    }
}
