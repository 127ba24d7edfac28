//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//!   emitting the canonical `component`/`op`/`event` fields
//! - Test capture mode for asserting on emitted events
//!
//! The engine owns start/end logging for each command. The store and the
//! core ops only emit `tracing::debug!` detail.
//!
//! ```rust
//! use picto_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
