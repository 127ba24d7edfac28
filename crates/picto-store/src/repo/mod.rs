//! Repository layer
//!
//! Row-level SQL for every entity, plus hydration of a whole database into
//! the in-memory `Store`.

pub mod hydration;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
