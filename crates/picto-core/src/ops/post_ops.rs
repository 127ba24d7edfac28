use crate::errors::{PictoError, Result};
use crate::model::{Entity, NewPost, Post, PostId, PostPatch};
use crate::rules::validation::{validate_new_post, validate_post_patch};

use super::store::Store;
use super::user_ops::require_user;

/// Create a Post owned by an existing User
///
/// # Errors
/// * `FieldTooLong` - If image or caption exceeds its limit
/// * `DanglingReference` - If `user_id` does not exist
pub fn create_post(store: &mut Store, new: NewPost) -> Result<PostId> {
    validate_new_post(&new)?;
    require_user(store, new.user_id, Entity::Post, "user_id")?;

    let id = store.next_id(Entity::Post);
    store.posts.insert(id, Post::from_new(id, new));
    Ok(id)
}

/// # Errors
/// * `PostNotFound` - If no post has this id
pub fn read_post(store: &Store, id: PostId) -> Result<&Post> {
    store.get_post(id)
}

/// # Errors
/// * `PostNotFound`, `FieldTooLong`, `DanglingReference` (new owner missing)
pub fn update_post(store: &mut Store, id: PostId, patch: PostPatch) -> Result<()> {
    validate_post_patch(&patch)?;
    store.get_post(id)?;
    if let Some(user_id) = patch.user_id {
        require_user(store, user_id, Entity::Post, "user_id")?;
    }

    patch.apply(store.get_post_mut(id)?);
    Ok(())
}

/// Delete a Post together with its comments and media
///
/// # Errors
/// * `PostNotFound` - If no post has this id
pub fn delete_post(store: &mut Store, id: PostId) -> Result<()> {
    store.get_post(id)?;

    store.comments.retain(|_, c| c.post_id != id);
    store.media.retain(|_, m| m.post_id != id);
    store.posts.remove(&id);
    Ok(())
}

/// Fail with `DanglingReference` unless `post_id` exists
pub(crate) fn require_post(
    store: &Store,
    post_id: PostId,
    entity: Entity,
    field: &'static str,
) -> Result<()> {
    if store.posts.contains_key(&post_id) {
        Ok(())
    } else {
        Err(PictoError::DanglingReference {
            entity,
            field,
            target: Entity::Post,
            target_id: post_id,
        })
    }
}
