//! Read-only queries over the table store
//!
//! Relationship navigation is expressed as "rows where fk = X" instead of
//! stored back-references.

pub mod relations;

pub use relations::{
    comments_by_author, comments_on_post, followers_of, following_of, list_comments,
    list_follows, list_media, list_posts, list_users, media_for_post, posts_by_user,
};
