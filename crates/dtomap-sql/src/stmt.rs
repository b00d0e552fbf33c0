mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Projection, Select};

mod update;
pub use update::Update;

use dtomap_core::{EntityMetadata, Result};

/// A statement synthesized from entity metadata, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// `SELECT * FROM t WHERE key = ?`
    pub fn select_by_key(meta: &EntityMetadata) -> Result<Statement> {
        Ok(Select::by_key(meta, Projection::All, "select by identity")?.into())
    }

    /// `SELECT * FROM t`
    pub fn select_all(meta: &EntityMetadata) -> Statement {
        Select::all(meta).into()
    }

    /// `SELECT COUNT(*) FROM t WHERE key = ?`
    pub fn count_by_key(meta: &EntityMetadata) -> Result<Statement> {
        Ok(Select::by_key(meta, Projection::Count, "count by identity")?.into())
    }

    /// Insert of every mapped column, identity included.
    pub fn insert_with_identity(meta: &EntityMetadata) -> Statement {
        Insert::with_identity(meta).into()
    }

    /// Insert of every mapped column except the identity. Types without an
    /// identity insert all their columns.
    pub fn insert_without_identity(meta: &EntityMetadata) -> Statement {
        Insert::without_identity(meta, 1).into()
    }

    /// Insert of `rows` tuples over the non-identity columns.
    pub fn bulk_insert_without_identity(meta: &EntityMetadata, rows: usize) -> Statement {
        Insert::without_identity(meta, rows).into()
    }

    /// `UPDATE t SET a = ?, b = ? WHERE key = ?`
    pub fn update(meta: &EntityMetadata) -> Result<Statement> {
        Ok(Update::by_key(meta)?.into())
    }

    /// `DELETE FROM t WHERE key = ?`
    pub fn delete(meta: &EntityMetadata) -> Result<Statement> {
        Ok(Delete::by_key(meta)?.into())
    }

    /// Number of `?` placeholders in the serialized statement.
    pub fn params_len(&self) -> usize {
        match self {
            Statement::Delete(_) => 1,
            Statement::Insert(insert) => insert.columns.len() * insert.rows,
            Statement::Select(select) => usize::from(select.key.is_some()),
            Statement::Update(update) => update.columns.len() + 1,
        }
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
