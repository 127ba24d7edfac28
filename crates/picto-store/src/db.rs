//! Connection management
//!
//! Every connection handed out here has foreign key enforcement switched
//! on; cascades and reference checks depend on it.

use std::path::Path;

use rusqlite::Connection;

use crate::config::{DatabaseConfig, JournalMode};
use crate::errors::{from_rusqlite, io_error, Result};

/// Open (creating if needed) the database described by `config`
pub fn open_with(config: &DatabaseConfig) -> Result<Connection> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("db_open", e))?;
        }
    }
    let conn = Connection::open(&config.path).map_err(from_rusqlite)?;
    configure(&conn, config.journal_mode)?;
    tracing::debug!(path = %config.path.display(), "opened database");
    Ok(conn)
}

/// Open a database file with default settings
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    open_with(&DatabaseConfig {
        path: path.as_ref().to_path_buf(),
        ..DatabaseConfig::default()
    })
}

/// Open an in-memory database (tests, dry runs)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn, JournalMode::Memory)?;
    Ok(conn)
}

/// Apply per-connection settings
pub fn configure(conn: &Connection, journal_mode: JournalMode) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    // journal_mode answers with the mode actually in effect
    let _mode: String = conn
        .pragma_update_and_check(None, "journal_mode", journal_mode.as_str(), |row| row.get(0))
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Whether foreign key enforcement is on for this connection
pub fn foreign_keys_enabled(conn: &Connection) -> Result<bool> {
    conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .map_err(from_rusqlite)
}
