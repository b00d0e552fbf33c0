mod exec_log;
pub use exec_log::{ExecLog, Execution};

pub use mock_client::{MockClient, MockStatement};

use dtomap::{Connection, Dialect};
use dtomap_driver_sqlite::Sqlite;

/// Installs a `tracing` subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A connection over a fresh [`MockClient`], returned alongside the client so
/// tests can script results and inspect the log.
pub fn mock() -> (Connection<MockClient>, MockClient) {
    init_tracing();

    let client = MockClient::new();
    (Connection::from_client(client.clone(), Dialect::Mysql), client)
}

/// A connection over an in-memory SQLite database set up with `schema`.
pub fn sqlite(schema: &str) -> Connection<Sqlite> {
    init_tracing();

    let client = Sqlite::in_memory().unwrap();
    client.execute_batch(schema).unwrap();
    Connection::from_client(client, Dialect::Ansi)
}
