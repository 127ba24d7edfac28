//! Comment commands

use picto_core::errors::PictoError;
use picto_core::model::{Comment, CommentId, CommentPatch, NewComment, PostId, UserId};
use picto_core::ops::comment_ops;
use picto_store::errors::{from_rusqlite, Result};
use picto_store::repo::hydration::load_store;
use picto_store::repo::SqliteRepo;
use rusqlite::Connection;

use super::boundary;

/// ## Errors
///
/// - `ReferenceError`: author or post does not exist
/// - `ConstraintViolation`: comment text too long
pub fn comment_create(conn: &Connection, new: NewComment) -> Result<CommentId> {
    boundary("comment_create", || {
        let mut store = load_store(conn)?;
        let id = comment_ops::create_comment(&mut store, new)?;
        SqliteRepo::persist_comment(conn, store.get_comment(id)?)?;
        Ok(id)
    })
}

/// ## Errors
///
/// - `NotFound`: no comment has this id
pub fn comment_get(conn: &Connection, id: CommentId) -> Result<Comment> {
    boundary("comment_get", || load(conn, id))
}

/// ## Errors
///
/// - `NotFound`, `ReferenceError`, `ConstraintViolation`
pub fn comment_update(
    conn: &mut Connection,
    id: CommentId,
    patch: CommentPatch,
) -> Result<Comment> {
    boundary("comment_update", || {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let mut store = load_store(&tx)?;
        comment_ops::update_comment(&mut store, id, patch)?;

        let comment = store.get_comment(id)?.clone();
        SqliteRepo::update_comment(&tx, &comment)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(comment)
    })
}

/// ## Errors
///
/// - `NotFound`: no comment has this id
pub fn comment_delete(conn: &Connection, id: CommentId) -> Result<()> {
    boundary("comment_delete", || {
        let mut store = load_store(conn)?;
        comment_ops::delete_comment(&mut store, id)?;
        SqliteRepo::delete_comment(conn, id)?;
        Ok(())
    })
}

pub fn comment_list(conn: &Connection) -> Result<Vec<Comment>> {
    boundary("comment_list", || SqliteRepo::list_comments(conn))
}

pub fn comments_by_author(conn: &Connection, user_id: UserId) -> Result<Vec<Comment>> {
    boundary("comments_by_author", || {
        SqliteRepo::comments_by_author(conn, user_id)
    })
}

pub fn comments_on_post(conn: &Connection, post_id: PostId) -> Result<Vec<Comment>> {
    boundary("comments_on_post", || SqliteRepo::comments_on_post(conn, post_id))
}

fn load(conn: &Connection, id: CommentId) -> Result<Comment> {
    SqliteRepo::get_comment(conn, id)?
        .ok_or_else(|| PictoError::CommentNotFound { comment_id: id }.into())
}
