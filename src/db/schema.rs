use rusqlite::Connection;

use crate::error::ComedorResult;

/// Initialize the local store schema. The store is deliberately a plain
/// key-value table: the draft list lives as one JSON string under a fixed
/// key, mirroring the web client's localStorage entry.
pub fn initialize(conn: &Connection) -> ComedorResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS local_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
