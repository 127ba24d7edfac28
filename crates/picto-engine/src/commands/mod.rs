//! Command handlers with boundary logging.
//!
//! One module per entity. Each write command:
//! - hydrates a `Store` from the connection (or its transaction)
//! - applies the matching `picto_core::ops` function, which owns the
//!   column, uniqueness, reference and self-follow rules
//! - persists the resulting row, with SQLite constraints as the backstop
//!
//! Reads go straight to `SqliteRepo`.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()`.

use std::time::Instant;

use picto_core::{log_op_end, log_op_error, log_op_start};
use picto_store::errors::Result;

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod seed;
pub mod user;

/// Run `f` between start/end boundary events, tagging any error with `op`
pub(crate) fn boundary<T>(op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(op);
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            Ok(value)
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e.with_op(op))
        }
    }
}
