//! Schema initialization
//!
//! Usage: picto init
//!
//! Migrations already ran when the database was opened; this reports them.

use picto_store::errors::Result;
use rusqlite::Connection;

pub fn execute(conn: &Connection) -> Result<()> {
    for migration_id in picto_store::migrations::applied_migrations(conn)? {
        println!("applied {}", migration_id);
    }
    Ok(())
}
