use crate::errors::Result;
use crate::model::{Comment, CommentId, CommentPatch, Entity, NewComment};
use crate::rules::validation::{validate_comment_patch, validate_new_comment};

use super::post_ops::require_post;
use super::store::Store;
use super::user_ops::require_user;

/// Create a Comment by an existing User on an existing Post
///
/// # Errors
/// * `FieldTooLong` - If `comment_text` exceeds its limit
/// * `DanglingReference` - If the author or the post does not exist
pub fn create_comment(store: &mut Store, new: NewComment) -> Result<CommentId> {
    validate_new_comment(&new)?;
    require_user(store, new.author_id, Entity::Comment, "author_id")?;
    require_post(store, new.post_id, Entity::Comment, "post_id")?;

    let id = store.next_id(Entity::Comment);
    store.comments.insert(id, Comment::from_new(id, new));
    Ok(id)
}

/// # Errors
/// * `CommentNotFound` - If no comment has this id
pub fn read_comment(store: &Store, id: CommentId) -> Result<&Comment> {
    store.get_comment(id)
}

/// # Errors
/// * `CommentNotFound`, `FieldTooLong`, `DanglingReference`
pub fn update_comment(store: &mut Store, id: CommentId, patch: CommentPatch) -> Result<()> {
    validate_comment_patch(&patch)?;
    store.get_comment(id)?;
    if let Some(author_id) = patch.author_id {
        require_user(store, author_id, Entity::Comment, "author_id")?;
    }
    if let Some(post_id) = patch.post_id {
        require_post(store, post_id, Entity::Comment, "post_id")?;
    }

    patch.apply(store.get_comment_mut(id)?);
    Ok(())
}

/// # Errors
/// * `CommentNotFound` - If no comment has this id
pub fn delete_comment(store: &mut Store, id: CommentId) -> Result<()> {
    store.get_comment(id)?;
    store.comments.remove(&id);
    Ok(())
}
