//! Media commands

use picto_core::errors::PictoError;
use picto_core::model::{Media, MediaId, MediaPatch, NewMedia, PostId};
use picto_core::ops::media_ops;
use picto_store::errors::{from_rusqlite, Result};
use picto_store::repo::hydration::load_store;
use picto_store::repo::SqliteRepo;
use rusqlite::Connection;

use super::boundary;

/// Attach media to a post
///
/// ## Errors
///
/// - `ReferenceError`: the post does not exist
/// - `ConstraintViolation`: type or url too long
pub fn media_create(conn: &Connection, new: NewMedia) -> Result<MediaId> {
    boundary("media_create", || {
        let mut store = load_store(conn)?;
        let id = media_ops::create_media(&mut store, new)?;
        SqliteRepo::persist_media(conn, store.get_media(id)?)?;
        Ok(id)
    })
}

/// ## Errors
///
/// - `NotFound`: no media row has this id
pub fn media_get(conn: &Connection, id: MediaId) -> Result<Media> {
    boundary("media_get", || load(conn, id))
}

/// ## Errors
///
/// - `NotFound`, `ReferenceError`, `ConstraintViolation`
pub fn media_update(conn: &mut Connection, id: MediaId, patch: MediaPatch) -> Result<Media> {
    boundary("media_update", || {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let mut store = load_store(&tx)?;
        media_ops::update_media(&mut store, id, patch)?;

        let media = store.get_media(id)?.clone();
        SqliteRepo::update_media(&tx, &media)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(media)
    })
}

/// ## Errors
///
/// - `NotFound`: no media row has this id
pub fn media_delete(conn: &Connection, id: MediaId) -> Result<()> {
    boundary("media_delete", || {
        let mut store = load_store(conn)?;
        media_ops::delete_media(&mut store, id)?;
        SqliteRepo::delete_media(conn, id)?;
        Ok(())
    })
}

pub fn media_list(conn: &Connection) -> Result<Vec<Media>> {
    boundary("media_list", || SqliteRepo::list_media(conn))
}

pub fn media_for_post(conn: &Connection, post_id: PostId) -> Result<Vec<Media>> {
    boundary("media_for_post", || SqliteRepo::media_for_post(conn, post_id))
}

fn load(conn: &Connection, id: MediaId) -> Result<Media> {
    SqliteRepo::get_media(conn, id)?
        .ok_or_else(|| PictoError::MediaNotFound { media_id: id }.into())
}
