use super::{Error, ErrorKind};

/// Error raised by the underlying database client.
#[derive(Debug)]
pub(super) struct DriverError {
    /// Statement the client was running, when the failure belongs to one.
    sql: Option<Box<str>>,

    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("database client error: ")?;

        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {err}")?;
            source = err.source();
        }

        if let Some(sql) = &self.sql {
            write!(f, "; sql={sql}")?;
        }

        Ok(())
    }
}

impl Error {
    /// Wraps an error produced by a database client outside of any statement,
    /// e.g. while opening a connection.
    ///
    /// Client errors are never translated or retried. The original error stays
    /// reachable via [`std::error::Error::source`] and can be downcast by the caller.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        driver(None, Box::new(err))
    }

    /// Wraps a client error raised while preparing or running `sql`.
    pub fn statement_failed(
        sql: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        driver(Some(sql.into().into()), Box::new(err))
    }

    /// Returns `true` if this error came from the database client.
    pub fn is_driver(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Driver(_)))
    }

    /// SQL of the statement whose execution failed, if any.
    pub fn failed_sql(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            ErrorKind::Driver(err) => err.sql.as_deref(),
            _ => None,
        })
    }
}

fn driver(sql: Option<Box<str>>, inner: Box<dyn std::error::Error + Send + Sync>) -> Error {
    Error::from(ErrorKind::Driver(DriverError { sql, inner }))
}
