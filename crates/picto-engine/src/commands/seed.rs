//! Seed import command

use std::path::Path;

use picto_store::errors::Result;
use picto_store::seed::{import_seed, SeedReport};
use rusqlite::Connection;

use super::boundary;

/// Import a seed file; all rows land or none do
///
/// ## Errors
///
/// - `InvalidInput`: unreadable file, bad YAML, wrong version, duplicate keys
/// - `ReferenceError`: a row names a key the seed does not define
/// - `ConstraintViolation`: a row clashes with existing data or breaks a limit
pub fn seed_import(conn: &mut Connection, path: &Path) -> Result<SeedReport> {
    boundary("seed_import", || import_seed(path, conn))
}
