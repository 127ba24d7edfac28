//! Picto Engine - command layer
//!
//! Coordinates core validation with SQLite persistence. Every public
//! command logs its own start/end boundary; the store below it only emits
//! `tracing::debug!`.

pub mod commands;
