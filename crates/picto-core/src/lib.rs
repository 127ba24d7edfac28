//! Picto Core - entity models and table semantics for the social schema
//!
//! This crate provides:
//! - User, Post, Comment, Media and Follower models with their serialization contract
//! - Column rules (length limits, nullability) shared with the SQL schema
//! - An in-memory table store with CRUD operations, uniqueness, reference
//!   checks and cascade deletes
//! - Reverse relationship queries (posts of a user, comments on a post, ...)
//! - The error facility (`PictoError`, `ExError`) and the logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

// Used by the logging macros so callers need not depend on picto-core-types
pub use picto_core_types;

pub use errors::{ExError, ExErrorKind, PictoError, Result};
pub use model::{
    Comment, Entity, Follower, Media, NewComment, NewMedia, NewPost, NewUser, Post, Record,
    ToRecord, User,
};
pub use ops::Store;
