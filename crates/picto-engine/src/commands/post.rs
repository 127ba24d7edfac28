//! Post commands

use picto_core::errors::PictoError;
use picto_core::model::{NewPost, Post, PostId, PostPatch, UserId};
use picto_core::ops::post_ops;
use picto_store::errors::{from_rusqlite, Result};
use picto_store::repo::hydration::load_store;
use picto_store::repo::SqliteRepo;
use rusqlite::Connection;

use super::boundary;

/// Create a post owned by `new.user_id`
///
/// ## Errors
///
/// - `ReferenceError`: the owner does not exist
/// - `ConstraintViolation`: image or caption too long
pub fn post_create(conn: &Connection, new: NewPost) -> Result<PostId> {
    boundary("post_create", || {
        let mut store = load_store(conn)?;
        let id = post_ops::create_post(&mut store, new)?;
        SqliteRepo::persist_post(conn, store.get_post(id)?)?;
        Ok(id)
    })
}

/// ## Errors
///
/// - `NotFound`: no post has this id
pub fn post_get(conn: &Connection, id: PostId) -> Result<Post> {
    boundary("post_get", || load(conn, id))
}

/// Apply a patch and return the updated row
///
/// ## Errors
///
/// - `NotFound`: no post has this id
/// - `ReferenceError`: reassigned to a user that does not exist
/// - `ConstraintViolation`: column limit exceeded
pub fn post_update(conn: &mut Connection, id: PostId, patch: PostPatch) -> Result<Post> {
    boundary("post_update", || {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let mut store = load_store(&tx)?;
        post_ops::update_post(&mut store, id, patch)?;

        let post = store.get_post(id)?.clone();
        SqliteRepo::update_post(&tx, &post)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(post)
    })
}

/// Delete a post together with its comments and media
///
/// ## Errors
///
/// - `NotFound`: no post has this id
pub fn post_delete(conn: &Connection, id: PostId) -> Result<()> {
    boundary("post_delete", || {
        let mut store = load_store(conn)?;
        post_ops::delete_post(&mut store, id)?;
        SqliteRepo::delete_post(conn, id)?;
        Ok(())
    })
}

pub fn post_list(conn: &Connection) -> Result<Vec<Post>> {
    boundary("post_list", || SqliteRepo::list_posts(conn))
}

/// Posts owned by `user_id`; empty for an unknown user
pub fn posts_by_user(conn: &Connection, user_id: UserId) -> Result<Vec<Post>> {
    boundary("posts_by_user", || SqliteRepo::posts_by_user(conn, user_id))
}

fn load(conn: &Connection, id: PostId) -> Result<Post> {
    SqliteRepo::get_post(conn, id)?.ok_or_else(|| PictoError::PostNotFound { post_id: id }.into())
}
