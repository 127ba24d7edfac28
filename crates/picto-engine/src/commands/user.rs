//! User commands

use picto_core::errors::PictoError;
use picto_core::model::{NewUser, User, UserId, UserPatch};
use picto_core::ops::user_ops;
use picto_store::errors::{from_rusqlite, Result};
use picto_store::repo::hydration::load_store;
use picto_store::repo::SqliteRepo;
use rusqlite::Connection;

use super::boundary;

/// Create a user
///
/// ## Errors
///
/// - `ConstraintViolation`: username or email taken, or a column limit exceeded
pub fn user_create(conn: &Connection, new: NewUser) -> Result<UserId> {
    boundary("user_create", || {
        let mut store = load_store(conn)?;
        let id = user_ops::create_user(&mut store, new)?;
        SqliteRepo::persist_user(conn, store.get_user(id)?)?;
        Ok(id)
    })
}

/// ## Errors
///
/// - `NotFound`: no user has this id
pub fn user_get(conn: &Connection, id: UserId) -> Result<User> {
    boundary("user_get", || load(conn, id))
}

/// ## Errors
///
/// - `NotFound`: no user has this username
pub fn user_get_by_username(conn: &Connection, username: &str) -> Result<User> {
    boundary("user_get_by_username", || {
        SqliteRepo::find_user_by_username(conn, username)?.ok_or_else(|| {
            PictoError::UsernameNotFound {
                username: username.to_string(),
            }
            .into()
        })
    })
}

/// ## Errors
///
/// - `NotFound`: no user has this email
pub fn user_get_by_email(conn: &Connection, email: &str) -> Result<User> {
    boundary("user_get_by_email", || {
        SqliteRepo::find_user_by_email(conn, email)?.ok_or_else(|| {
            PictoError::EmailNotFound {
                email: email.to_string(),
            }
            .into()
        })
    })
}

/// Apply a patch and return the updated row
///
/// Re-asserting the user's own username or email is not a conflict.
///
/// ## Errors
///
/// - `NotFound`: no user has this id
/// - `ConstraintViolation`: uniqueness or column limit breached
pub fn user_update(conn: &mut Connection, id: UserId, patch: UserPatch) -> Result<User> {
    boundary("user_update", || {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let mut store = load_store(&tx)?;
        user_ops::update_user(&mut store, id, patch)?;

        let user = store.get_user(id)?.clone();
        SqliteRepo::update_user(&tx, &user)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(user)
    })
}

/// Delete a user with their posts (and those posts' comments and media),
/// their comments elsewhere, and every follow edge touching them
///
/// ## Errors
///
/// - `NotFound`: no user has this id
pub fn user_delete(conn: &Connection, id: UserId) -> Result<()> {
    boundary("user_delete", || {
        let mut store = load_store(conn)?;
        user_ops::delete_user(&mut store, id)?;
        SqliteRepo::delete_user(conn, id)?;
        Ok(())
    })
}

pub fn user_list(conn: &Connection) -> Result<Vec<User>> {
    boundary("user_list", || SqliteRepo::list_users(conn))
}

fn load(conn: &Connection, id: UserId) -> Result<User> {
    SqliteRepo::get_user(conn, id)?.ok_or_else(|| PictoError::UserNotFound { user_id: id }.into())
}
