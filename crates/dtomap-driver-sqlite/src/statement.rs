use crate::{
    value::{Param, SqliteValue},
    Shared,
};

use dtomap_core::{driver::PreparedStatement, Result, Row, Value};
use std::{
    collections::VecDeque,
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

/// A statement prepared on a [`Sqlite`](crate::Sqlite) connection.
///
/// Rows of the latest execution are buffered and handed out by the fetch
/// methods.
pub struct Statement {
    shared: Arc<Shared>,
    sql: String,
    rows: Mutex<VecDeque<Row>>,
}

impl Statement {
    pub(crate) fn new(shared: Arc<Shared>, sql: &str) -> Self {
        Self {
            shared,
            sql: sql.to_string(),
            rows: Mutex::new(VecDeque::new()),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, VecDeque<Row>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreparedStatement for Statement {
    fn execute(&self, params: &[Value]) -> Result<bool> {
        let connection = self.shared.connection();
        let mut stmt = connection
            .prepare_cached(&self.sql)
            .map_err(|err| self.shared.failed(&self.sql, err))?;

        let params = rusqlite::params_from_iter(params.iter().map(Param));

        if stmt.column_count() == 0 {
            stmt.execute(params).map_err(|err| self.shared.failed(&self.sql, err))?;
            self.rows().clear();
            return Ok(true);
        }

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt.query(params).map_err(|err| self.shared.failed(&self.sql, err))?;
        let mut buffered = VecDeque::new();

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut ret = Row::new();

                    for (index, column) in columns.iter().enumerate() {
                        let value = SqliteValue::from_sql(row, index)
                            .map_err(|err| self.shared.failed(&self.sql, err))?;
                        ret.insert(column.clone(), value.into_inner());
                    }

                    buffered.push_back(ret);
                }
                Ok(None) => break,
                Err(err) => return Err(self.shared.failed(&self.sql, err)),
            }
        }

        *self.rows() = buffered;
        Ok(true)
    }

    fn fetch_one(&self) -> Result<Option<Row>> {
        Ok(self.rows().pop_front())
    }

    fn fetch_all(&self) -> Result<Vec<Row>> {
        Ok(self.rows().drain(..).collect())
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement").field("sql", &self.sql).finish()
    }
}
