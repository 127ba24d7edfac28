//! Picto Store - SQLite persistence for the social schema
//!
//! Provides:
//! - Connection management with foreign keys always enforced
//! - Embedded, checksummed migrations
//! - `SqliteRepo`: row-level SQL for every entity, with SQLite constraint
//!   failures classified into the error taxonomy
//! - Hydration of the whole database into an in-memory `Store`
//! - Seed Format v0 (YAML) parser and importer
//! - File/env configuration

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

pub use config::StoreConfig;
pub use errors::Result;
