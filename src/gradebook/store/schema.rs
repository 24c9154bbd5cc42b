use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS groups (
        group_id INTEGER PRIMARY KEY AUTOINCREMENT,
        group_number TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS students (
        student_id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_name TEXT NOT NULL,
        group_id INTEGER NOT NULL,
        performance TEXT NOT NULL,
        FOREIGN KEY(group_id) REFERENCES groups(group_id)
    );
";

/// Opens (or creates) the database at `path` and makes sure the tables exist.
pub fn open_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    debug!(path = %path.display(), "opened database");
    initialize(&conn)?;
    Ok(conn)
}

/// Opens a private in-memory database with the same schema.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn)?;
    Ok(conn)
}

/// Creates the `groups` and `students` tables if they are missing.
///
/// Safe to run before every command.
pub fn initialize(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.execute_batch(CREATE_TABLES)?;
    Ok(())
}
