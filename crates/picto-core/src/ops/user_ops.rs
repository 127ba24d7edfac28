use crate::errors::{PictoError, Result};
use crate::model::{Entity, NewUser, User, UserId, UserPatch};
use crate::rules::validation::{validate_new_user, validate_user_patch};

use super::post_ops;
use super::store::Store;

/// Create a new User
///
/// # Errors
/// * `FieldTooLong` - If a column limit is exceeded
/// * `UsernameTaken` / `EmailTaken` - If another user already holds the value
pub fn create_user(store: &mut Store, new: NewUser) -> Result<UserId> {
    validate_new_user(&new)?;
    ensure_username_free(store, &new.username, None)?;
    ensure_email_free(store, &new.email, None)?;

    let id = store.next_id(Entity::User);
    let user = User::from_new(id, new);
    store.restore_user(user);
    Ok(id)
}

/// # Errors
/// * `UserNotFound` - If no user has this id
pub fn read_user(store: &Store, id: UserId) -> Result<&User> {
    store.get_user(id)
}

/// # Errors
/// * `UsernameNotFound` - If no user has this username
pub fn find_user_by_username<'a>(store: &'a Store, username: &str) -> Result<&'a User> {
    let id = store
        .usernames
        .get(username)
        .ok_or_else(|| PictoError::UsernameNotFound {
            username: username.to_string(),
        })?;
    store.get_user(*id)
}

/// # Errors
/// * `EmailNotFound` - If no user has this email
pub fn find_user_by_email<'a>(store: &'a Store, email: &str) -> Result<&'a User> {
    let id = store
        .emails
        .get(email)
        .ok_or_else(|| PictoError::EmailNotFound {
            email: email.to_string(),
        })?;
    store.get_user(*id)
}

/// Apply a patch to an existing User
///
/// Re-asserting a user's own username or email is not a conflict.
///
/// # Errors
/// * `UserNotFound`, `FieldTooLong`, `UsernameTaken`, `EmailTaken`
pub fn update_user(store: &mut Store, id: UserId, patch: UserPatch) -> Result<()> {
    validate_user_patch(&patch)?;
    let current = store.get_user(id)?.clone();

    if let Some(ref username) = patch.username {
        ensure_username_free(store, username, Some(id))?;
    }
    if let Some(ref email) = patch.email {
        ensure_email_free(store, email, Some(id))?;
    }

    let user = store.get_user_mut(id)?;
    patch.apply(user);
    let (username, email) = (user.username.clone(), user.email.clone());

    if username != current.username {
        store.usernames.remove(&current.username);
        store.usernames.insert(username, id);
    }
    if email != current.email {
        store.emails.remove(&current.email);
        store.emails.insert(email, id);
    }
    Ok(())
}

/// Delete a User and everything that depends on it
///
/// Cascades to the user's posts (and through them to those posts' comments
/// and media), to comments the user authored on other posts, and to every
/// follow edge on either side.
///
/// # Errors
/// * `UserNotFound` - If no user has this id
pub fn delete_user(store: &mut Store, id: UserId) -> Result<()> {
    let user = store.get_user(id)?.clone();

    let owned_posts: Vec<_> = store
        .posts
        .values()
        .filter(|p| p.user_id == id)
        .map(|p| p.id)
        .collect();
    for post_id in owned_posts {
        post_ops::delete_post(store, post_id)?;
    }

    store.comments.retain(|_, c| c.author_id != id);
    store.follows.retain(|edge| !edge.involves(id));

    store.usernames.remove(&user.username);
    store.emails.remove(&user.email);
    store.users.remove(&id);
    Ok(())
}

fn ensure_username_free(store: &Store, username: &str, owner: Option<UserId>) -> Result<()> {
    match store.usernames.get(username) {
        Some(holder) if Some(*holder) != owner => Err(PictoError::UsernameTaken {
            username: username.to_string(),
        }),
        _ => Ok(()),
    }
}

fn ensure_email_free(store: &Store, email: &str, owner: Option<UserId>) -> Result<()> {
    match store.emails.get(email) {
        Some(holder) if Some(*holder) != owner => Err(PictoError::EmailTaken {
            email: email.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Fail with `DanglingReference` unless `user_id` exists
pub(crate) fn require_user(
    store: &Store,
    user_id: UserId,
    entity: Entity,
    field: &'static str,
) -> Result<()> {
    if store.users.contains_key(&user_id) {
        Ok(())
    } else {
        Err(PictoError::DanglingReference {
            entity,
            field,
            target: Entity::User,
            target_id: user_id,
        })
    }
}
