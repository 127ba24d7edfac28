//! Seed Format v0 schema
//!
//! Rows refer to each other through seed-local keys. A user reference may
//! also name the username of a user already in the database.
//!
//! ```yaml
//! schema_version: 0
//! users:
//!   - key: alice
//!     username: alice
//!     email: a@x.com
//!     password: h1
//! posts:
//!   - key: first
//!     user: alice
//!     caption: hi
//! comments:
//!   - author: alice
//!     post: first
//!     text: nice
//! media:
//!   - post: first
//!     type: image
//!     url: https://cdn.example/1.jpg
//! follows:
//!   - follower: bob
//!     followed: alice
//! ```

use picto_core::picto_core_types::Sensitive;
use serde::Deserialize;

/// Top-level seed file structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedV0 {
    /// Must be 0 for this format
    pub schema_version: u32,

    #[serde(default)]
    pub users: Vec<SeedUser>,

    #[serde(default)]
    pub posts: Vec<SeedPost>,

    #[serde(default)]
    pub comments: Vec<SeedComment>,

    #[serde(default)]
    pub media: Vec<SeedMedia>,

    #[serde(default)]
    pub follows: Vec<SeedFollow>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedUser {
    pub key: String,
    pub username: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    pub email: String,
    pub password: Sensitive<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPost {
    pub key: String,
    /// Owner: a user key from this seed, or an existing username
    pub user: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedComment {
    pub author: String,
    /// Post key from this seed
    pub post: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedMedia {
    pub post: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFollow {
    pub follower: String,
    pub followed: String,
}
