//! Error helpers for picto-store
//!
//! Everything here produces the structured `ExError` from picto-core.

use picto_core::errors::{ExError, ExErrorKind};
use picto_core::model::Entity;
use picto_core::rules::COLUMN_RULES;
use rusqlite::ffi;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

pub fn config_error(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("config_load")
        .with_message(reason)
}

pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Classify a rusqlite error
///
/// Constraint failures are mapped by extended result code: UNIQUE, PRIMARY
/// KEY, CHECK and NOT NULL become `ConstraintViolation`; FOREIGN KEY becomes
/// `ReferenceError`. Where SQLite's message names the table and column the
/// entity and field are attached. Everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let (extended, detail) = match &err {
        rusqlite::Error::SqliteFailure(e, msg)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            (e.extended_code, msg.clone().unwrap_or_default())
        }
        _ => {
            return ExError::new(ExErrorKind::Persistence)
                .with_op("sqlite")
                .with_message(err.to_string())
        }
    };

    match extended {
        ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
            let ex = ExError::new(ExErrorKind::ConstraintViolation).with_message(detail.clone());
            with_columns(ex, detail.trim_start_matches("UNIQUE constraint failed: "))
        }
        ffi::SQLITE_CONSTRAINT_NOTNULL => {
            let ex = ExError::new(ExErrorKind::ConstraintViolation).with_message(detail.clone());
            with_columns(ex, detail.trim_start_matches("NOT NULL constraint failed: "))
        }
        ffi::SQLITE_CONSTRAINT_CHECK => {
            let name = detail.trim_start_matches("CHECK constraint failed: ").trim();
            let ex = ExError::new(ExErrorKind::ConstraintViolation).with_message(detail.clone());
            with_check_name(ex, name)
        }
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
            ExError::new(ExErrorKind::ReferenceError).with_message(detail)
        }
        _ => ExError::new(ExErrorKind::ConstraintViolation).with_message(detail),
    }
}

/// Attach entity and field from "table.col[, table.col...]"
fn with_columns(ex: ExError, columns: &str) -> ExError {
    let mut entity = None;
    let mut fields = Vec::new();
    for part in columns.split(',') {
        if let Some((table, column)) = part.trim().split_once('.') {
            entity = entity.or_else(|| Entity::from_table(table));
            fields.push(column.to_string());
        }
    }

    let ex = match entity {
        Some(e) => ex.with_entity(e),
        None => ex,
    };
    if fields.is_empty() {
        ex
    } else {
        ex.with_field(fields.join(","))
    }
}

/// Attach entity and field from a named CHECK constraint
fn with_check_name(ex: ExError, name: &str) -> ExError {
    if name == "followers_no_self_follow" {
        return ex.with_entity(Entity::Follower);
    }
    COLUMN_RULES
        .iter()
        .find(|rule| format!("{}_{}_len", rule.entity.table(), rule.column) == name)
        .map(|rule| ex.clone().with_entity(rule.entity).with_field(rule.column))
        .unwrap_or(ex)
}
