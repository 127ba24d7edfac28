use crate::errors::Result;
use crate::model::{Entity, Media, MediaId, MediaPatch, NewMedia};
use crate::rules::validation::{validate_media_patch, validate_new_media};

use super::post_ops::require_post;
use super::store::Store;

/// Attach Media to an existing Post
///
/// # Errors
/// * `FieldTooLong` - If `type` or `url` exceeds its limit
/// * `DanglingReference` - If the post does not exist
pub fn create_media(store: &mut Store, new: NewMedia) -> Result<MediaId> {
    validate_new_media(&new)?;
    require_post(store, new.post_id, Entity::Media, "post_id")?;

    let id = store.next_id(Entity::Media);
    store.media.insert(id, Media::from_new(id, new));
    Ok(id)
}

/// # Errors
/// * `MediaNotFound` - If no media row has this id
pub fn read_media(store: &Store, id: MediaId) -> Result<&Media> {
    store.get_media(id)
}

/// # Errors
/// * `MediaNotFound`, `FieldTooLong`, `DanglingReference`
pub fn update_media(store: &mut Store, id: MediaId, patch: MediaPatch) -> Result<()> {
    validate_media_patch(&patch)?;
    store.get_media(id)?;
    if let Some(post_id) = patch.post_id {
        require_post(store, post_id, Entity::Media, "post_id")?;
    }

    patch.apply(store.get_media_mut(id)?);
    Ok(())
}

/// # Errors
/// * `MediaNotFound` - If no media row has this id
pub fn delete_media(store: &mut Store, id: MediaId) -> Result<()> {
    store.get_media(id)?;
    store.media.remove(&id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PictoError;
    use crate::model::{NewPost, NewUser};
    use crate::ops::post_ops::create_post;
    use crate::ops::user_ops::create_user;

    fn store_with_media() -> (Store, MediaId) {
        let mut store = Store::new();
        let user = create_user(&mut store, NewUser::new("alice", "a@x.com", "h1")).unwrap();
        let post = create_post(&mut store, NewPost::new(user)).unwrap();
        let id = create_media(&mut store, NewMedia::new(post, "image", "a.png")).unwrap();
        (store, id)
    }

    #[test]
    fn test_media_requires_existing_post() {
        let mut store = Store::new();
        let err = create_media(&mut store, NewMedia::new(4, "image", "a.png")).unwrap_err();
        assert_eq!(
            err,
            PictoError::DanglingReference {
                entity: Entity::Media,
                field: "post_id",
                target: Entity::Post,
                target_id: 4,
            }
        );
    }

    #[test]
    fn test_update_to_missing_post_is_rejected() {
        let (mut store, id) = store_with_media();

        let patch = MediaPatch {
            url: Some("b.png".to_string()),
            post_id: Some(9),
            ..Default::default()
        };
        assert!(matches!(
            update_media(&mut store, id, patch),
            Err(PictoError::DanglingReference { field: "post_id", target_id: 9, .. })
        ));

        let media = read_media(&store, id).unwrap();
        assert_eq!((media.post_id, media.url.as_str()), (1, "a.png"));
    }

    #[test]
    fn test_update_url_over_limit_is_rejected() {
        let (mut store, id) = store_with_media();

        let patch = MediaPatch {
            url: Some("x".repeat(121)),
            ..Default::default()
        };
        assert!(matches!(
            update_media(&mut store, id, patch),
            Err(PictoError::FieldTooLong { field: "url", max: 120, .. })
        ));
        assert_eq!(read_media(&store, id).unwrap().url, "a.png");
    }
}
