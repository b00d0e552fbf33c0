use crate::{Result, Row, Value};

use std::fmt::Debug;

/// A database connection able to prepare statements.
///
/// Errors raised by the underlying database are reported as
/// [`Error::driver`](crate::Error::driver) so the native error stays
/// reachable through `source()`.
pub trait Client: Debug {
    type Statement: PreparedStatement;

    /// Prepares `sql`, which uses `?` placeholders.
    fn prepare(&self, sql: &str) -> Result<Self::Statement>;

    fn begin_transaction(&self) -> Result<bool>;

    fn commit(&self) -> Result<bool>;

    fn rollback(&self) -> Result<bool>;

    /// Identifier generated by the most recent insert, as text.
    fn last_insert_id(&self) -> Result<String>;

    /// Code of the most recent database error, if any.
    fn error_code(&self) -> Option<String>;

    /// Details of the most recent database error. Empty when there is none.
    fn error_info(&self) -> Vec<String>;
}

/// A prepared statement. Results of the latest `execute` are read with the
/// fetch methods.
pub trait PreparedStatement: Debug {
    fn execute(&self, params: &[Value]) -> Result<bool>;

    /// Next row of the latest execution.
    fn fetch_one(&self) -> Result<Option<Row>>;

    /// Remaining rows of the latest execution.
    fn fetch_all(&self) -> Result<Vec<Row>>;
}
