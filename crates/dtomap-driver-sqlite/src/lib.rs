mod statement;
pub use statement::Statement;

mod value;

use dtomap_core::{driver::Client, Error, Result};
use rusqlite::Connection as RusqliteConnection;
use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use url::Url;

/// A [`Client`] over a single SQLite connection.
#[derive(Debug, Clone)]
pub struct Sqlite {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    connection: Mutex<RusqliteConnection>,

    /// Code and message of the most recent failure.
    last_error: Mutex<Option<(String, String)>>,
}

impl Sqlite {
    /// Opens the database named by a `sqlite::memory:` or `sqlite:<path>` URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| Error::invalid_connection_url(&url_str, err))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(
                &url_str,
                "connection URL does not have a `sqlite` scheme",
            ));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::from_connection(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self::from_connection(connection))
    }

    fn from_connection(connection: RusqliteConnection) -> Self {
        Self {
            shared: Arc::new(Shared {
                connection: Mutex::new(connection),
                last_error: Mutex::new(None),
            }),
        }
    }

    /// Runs one or more `;` separated statements without parameters, e.g. to
    /// create tables.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        let connection = self.shared.connection();
        connection
            .execute_batch(sql)
            .map_err(|err| self.shared.failed(sql, err))
    }

    fn transaction_control(&self, sql: &str) -> Result<bool> {
        tracing::trace!(sql, "transaction control");
        self.execute_batch(sql)?;
        Ok(true)
    }
}

impl Shared {
    fn connection(&self) -> MutexGuard<'_, RusqliteConnection> {
        self.connection.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records `err` for `error_code` / `error_info` and wraps it together
    /// with the statement that raised it.
    fn failed(&self, sql: &str, err: rusqlite::Error) -> Error {
        let code = match &err {
            rusqlite::Error::SqliteFailure(failure, _) => failure.extended_code.to_string(),
            _ => "HY000".to_string(),
        };

        *self.last_error.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((code, err.to_string()));

        Error::statement_failed(sql, err)
    }
}

impl Client for Sqlite {
    type Statement = Statement;

    fn prepare(&self, sql: &str) -> Result<Statement> {
        {
            // Surface syntax errors at prepare time
            let connection = self.shared.connection();
            connection
                .prepare_cached(sql)
                .map_err(|err| self.shared.failed(sql, err))?;
        }

        Ok(Statement::new(self.shared.clone(), sql))
    }

    fn begin_transaction(&self) -> Result<bool> {
        self.transaction_control("BEGIN")
    }

    fn commit(&self) -> Result<bool> {
        self.transaction_control("COMMIT")
    }

    fn rollback(&self) -> Result<bool> {
        self.transaction_control("ROLLBACK")
    }

    fn last_insert_id(&self) -> Result<String> {
        Ok(self.shared.connection().last_insert_rowid().to_string())
    }

    fn error_code(&self) -> Option<String> {
        self.shared
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(code, _)| code.clone())
    }

    fn error_info(&self) -> Vec<String> {
        match &*self.shared.last_error.lock().unwrap_or_else(PoisonError::into_inner) {
            Some((code, message)) => vec![code.clone(), message.clone()],
            None => vec![],
        }
    }
}
