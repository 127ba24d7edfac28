//! Follow edge commands
//!
//! Edges are keyed by the (follower_id, followed_id) pair itself.

use picto_core::errors::PictoError;
use picto_core::model::{Follower, UserId};
use picto_core::ops::follower_ops;
use picto_store::errors::{from_rusqlite, Result};
use picto_store::repo::hydration::load_store;
use picto_store::repo::SqliteRepo;
use rusqlite::Connection;

use super::boundary;

/// Record that `edge.follower_id` follows `edge.followed_id`
///
/// ## Errors
///
/// - `ConstraintViolation`: self-follow, or the edge already exists
/// - `ReferenceError`: either user does not exist
pub fn follow_create(conn: &Connection, edge: Follower) -> Result<()> {
    boundary("follow_create", || {
        let mut store = load_store(conn)?;
        follower_ops::follow(&mut store, edge)?;
        SqliteRepo::insert_follow(conn, edge)
    })
}

/// ## Errors
///
/// - `NotFound`: the edge does not exist
pub fn follow_get(conn: &Connection, edge: Follower) -> Result<Follower> {
    boundary("follow_get", || {
        if SqliteRepo::follow_exists(conn, edge)? {
            Ok(edge)
        } else {
            Err(PictoError::FollowNotFound {
                follower_id: edge.follower_id,
                followed_id: edge.followed_id,
            }
            .into())
        }
    })
}

/// Replace edge `old` with edge `new` in one transaction
///
/// ## Errors
///
/// - `NotFound`: `old` does not exist
/// - anything `follow_create` raises for `new`
pub fn follow_update(conn: &mut Connection, old: Follower, new: Follower) -> Result<()> {
    boundary("follow_update", || {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let mut store = load_store(&tx)?;
        follower_ops::update_follow(&mut store, old, new)?;
        if old == new {
            return Ok(());
        }

        SqliteRepo::delete_follow(&tx, old)?;
        SqliteRepo::insert_follow(&tx, new)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(())
    })
}

/// ## Errors
///
/// - `NotFound`: the edge does not exist
pub fn follow_delete(conn: &Connection, edge: Follower) -> Result<()> {
    boundary("follow_delete", || {
        let mut store = load_store(conn)?;
        follower_ops::unfollow(&mut store, edge)?;
        SqliteRepo::delete_follow(conn, edge)?;
        Ok(())
    })
}

pub fn follow_list(conn: &Connection) -> Result<Vec<Follower>> {
    boundary("follow_list", || SqliteRepo::list_follows(conn))
}

/// Edges pointing at `user_id`
pub fn followers_of(conn: &Connection, user_id: UserId) -> Result<Vec<Follower>> {
    boundary("followers_of", || SqliteRepo::followers_of(conn, user_id))
}

/// Edges leaving `user_id`
pub fn following_of(conn: &Connection, user_id: UserId) -> Result<Vec<Follower>> {
    boundary("following_of", || SqliteRepo::following_of(conn, user_id))
}
