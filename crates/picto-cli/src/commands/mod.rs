//! Subcommand implementations
//!
//! Rows are printed to stdout as one JSON object per line, using each
//! entity's serialization contract.

use picto_core::errors::{ExError, ExErrorKind};
use picto_core::ToRecord;
use picto_store::errors::Result;

pub mod comment;
pub mod follow;
pub mod init;
pub mod media;
pub mod post;
pub mod seed;
pub mod user;

pub(crate) fn print_record<T: ToRecord>(row: &T) -> Result<()> {
    print_json(&row.to_record())
}

pub(crate) fn print_records<T: ToRecord>(rows: &[T]) -> Result<()> {
    rows.iter().try_for_each(|row| print_record(row))
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let line = serde_json::to_string(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("print")
            .with_message(e.to_string())
    })?;
    println!("{}", line);
    Ok(())
}
