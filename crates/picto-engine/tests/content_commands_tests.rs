// Integration tests for post, comment and media command handlers.

mod common;

use common::{add_post, add_user, setup_db};
use picto_core::model::{
    CommentPatch, Entity, MediaPatch, NewComment, NewMedia, NewPost, PostPatch,
};
use picto_core::ExErrorKind;
use picto_engine::commands::comment::{
    comment_create, comment_delete, comment_get, comment_update, comments_on_post,
};
use picto_engine::commands::media::{
    media_create, media_delete, media_for_post, media_get, media_list, media_update,
};
use picto_engine::commands::post::{post_create, post_delete, post_get, post_list, post_update};

// ---------------------------------------------------------------------------
// posts
// ---------------------------------------------------------------------------

#[test]
fn test_post_create_with_missing_owner() {
    let (_tmp, conn) = setup_db();

    let err = post_create(&conn, NewPost::new(3)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ReferenceError);
    assert_eq!(err.entity(), Some(Entity::Post));
    assert_eq!(err.field(), Some("user_id"));
    assert!(post_list(&conn).unwrap().is_empty());
}

#[test]
fn test_post_optional_fields_default_to_none() {
    let (_tmp, conn) = setup_db();
    let alice = add_user(&conn, "alice");

    let id = post_create(&conn, NewPost::new(alice)).unwrap();
    let post = post_get(&conn, id).unwrap();

    assert_eq!(post.image, None);
    assert_eq!(post.caption, None);
}

#[test]
fn test_post_update_reassign_and_clear_caption() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let bob = add_user(&conn, "bob");
    let id = add_post(&conn, alice, "hi");

    let post = post_update(
        &mut conn,
        id,
        PostPatch {
            user_id: Some(bob),
            caption: Some(None),
            ..PostPatch::default()
        },
    )
    .unwrap();

    assert_eq!(post.user_id, bob);
    assert_eq!(post.caption, None);
}

#[test]
fn test_post_update_to_missing_owner_leaves_row_alone() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let id = add_post(&conn, alice, "hi");

    let patch = PostPatch {
        user_id: Some(77),
        caption: Some(Some("changed".to_string())),
        ..PostPatch::default()
    };
    let err = post_update(&mut conn, id, patch).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ReferenceError);
    assert_eq!(post_get(&conn, id).unwrap().caption.as_deref(), Some("hi"));
}

#[test]
fn test_post_delete_cascades() {
    let (_tmp, conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let id = add_post(&conn, alice, "hi");
    let comment = comment_create(&conn, NewComment::new(alice, id, "first")).unwrap();
    let media = media_create(&conn, NewMedia::new(id, "image", "https://x/1.jpg")).unwrap();

    post_delete(&conn, id).unwrap();

    assert_eq!(comment_get(&conn, comment).unwrap_err().kind(), ExErrorKind::NotFound);
    assert_eq!(media_get(&conn, media).unwrap_err().kind(), ExErrorKind::NotFound);
    assert_eq!(post_delete(&conn, id).unwrap_err().kind(), ExErrorKind::NotFound);
}

// ---------------------------------------------------------------------------
// comments
// ---------------------------------------------------------------------------

#[test]
fn test_comment_create_reference_checks() {
    let (_tmp, conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let post = add_post(&conn, alice, "hi");

    let no_post = comment_create(&conn, NewComment::new(alice, 99, "x")).unwrap_err();
    assert_eq!(no_post.kind(), ExErrorKind::ReferenceError);
    assert_eq!(no_post.field(), Some("post_id"));

    let no_author = comment_create(&conn, NewComment::new(99, post, "x")).unwrap_err();
    assert_eq!(no_author.kind(), ExErrorKind::ReferenceError);
    assert_eq!(no_author.field(), Some("author_id"));
}

#[test]
fn test_comment_text_limit() {
    let (_tmp, conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let post = add_post(&conn, alice, "hi");

    comment_create(&conn, NewComment::new(alice, post, "x".repeat(250))).unwrap();
    let err = comment_create(&conn, NewComment::new(alice, post, "x".repeat(251))).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.field(), Some("comment_text"));
}

#[test]
fn test_comment_update_and_delete() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let post = add_post(&conn, alice, "hi");
    let id = comment_create(&conn, NewComment::new(alice, post, "frist")).unwrap();

    let patch = CommentPatch {
        comment_text: Some("first".to_string()),
        ..CommentPatch::default()
    };
    assert_eq!(comment_update(&mut conn, id, patch).unwrap().comment_text, "first");

    comment_delete(&conn, id).unwrap();
    assert!(comments_on_post(&conn, post).unwrap().is_empty());
}

#[test]
fn test_comment_update_to_missing_author_leaves_row_alone() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let post = add_post(&conn, alice, "hi");
    let id = comment_create(&conn, NewComment::new(alice, post, "first")).unwrap();

    let patch = CommentPatch {
        comment_text: Some("edited".to_string()),
        author_id: Some(99),
        ..CommentPatch::default()
    };
    let err = comment_update(&mut conn, id, patch).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ReferenceError);
    assert_eq!(err.entity(), Some(Entity::Comment));
    assert_eq!(err.field(), Some("author_id"));
    assert_eq!(err.op(), Some("comment_update"));
    let comment = comment_get(&conn, id).unwrap();
    assert_eq!(comment.comment_text, "first");
    assert_eq!(comment.author_id, alice);
}

#[test]
fn test_comment_update_to_missing_post_leaves_row_alone() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let post = add_post(&conn, alice, "hi");
    let id = comment_create(&conn, NewComment::new(alice, post, "first")).unwrap();

    let patch = CommentPatch {
        post_id: Some(99),
        ..CommentPatch::default()
    };
    let err = comment_update(&mut conn, id, patch).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ReferenceError);
    assert_eq!(err.field(), Some("post_id"));
    assert_eq!(comment_get(&conn, id).unwrap().post_id, post);
    assert_eq!(comments_on_post(&conn, post).unwrap().len(), 1);
}

#[test]
fn test_comment_update_text_limit() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let post = add_post(&conn, alice, "hi");
    let id = comment_create(&conn, NewComment::new(alice, post, "first")).unwrap();

    let patch = CommentPatch {
        comment_text: Some("x".repeat(251)),
        ..CommentPatch::default()
    };
    let err = comment_update(&mut conn, id, patch).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.field(), Some("comment_text"));
    assert_eq!(comment_get(&conn, id).unwrap().comment_text, "first");
}

// ---------------------------------------------------------------------------
// media
// ---------------------------------------------------------------------------

#[test]
fn test_media_requires_existing_post() {
    let (_tmp, conn) = setup_db();

    let err = media_create(&conn, NewMedia::new(1, "image", "u")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ReferenceError);
    assert_eq!(err.entity(), Some(Entity::Media));
    assert!(media_list(&conn).unwrap().is_empty());
}

#[test]
fn test_media_update_moves_between_posts() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let first = add_post(&conn, alice, "one");
    let second = add_post(&conn, alice, "two");
    let id = media_create(&conn, NewMedia::new(first, "video", "v.mp4")).unwrap();

    let patch = MediaPatch {
        post_id: Some(second),
        ..MediaPatch::default()
    };
    media_update(&mut conn, id, patch).unwrap();

    assert!(media_for_post(&conn, first).unwrap().is_empty());
    assert_eq!(media_for_post(&conn, second).unwrap()[0].media_type, "video");

    media_delete(&conn, id).unwrap();
    assert_eq!(media_delete(&conn, id).unwrap_err().kind(), ExErrorKind::NotFound);
}

#[test]
fn test_media_update_to_missing_post_leaves_row_alone() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let post = add_post(&conn, alice, "one");
    let id = media_create(&conn, NewMedia::new(post, "image", "a.png")).unwrap();

    let patch = MediaPatch {
        url: Some("b.png".to_string()),
        post_id: Some(99),
        ..MediaPatch::default()
    };
    let err = media_update(&mut conn, id, patch).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ReferenceError);
    assert_eq!(err.entity(), Some(Entity::Media));
    assert_eq!(err.field(), Some("post_id"));
    let media = media_get(&conn, id).unwrap();
    assert_eq!(media.post_id, post);
    assert_eq!(media.url, "a.png");
}

#[test]
fn test_media_update_url_limit() {
    let (_tmp, mut conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let post = add_post(&conn, alice, "one");
    let id = media_create(&conn, NewMedia::new(post, "image", "a.png")).unwrap();

    let patch = MediaPatch {
        url: Some("x".repeat(121)),
        ..MediaPatch::default()
    };
    let err = media_update(&mut conn, id, patch).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.entity(), Some(Entity::Media));
    assert_eq!(err.field(), Some("url"));
    assert_eq!(media_get(&conn, id).unwrap().url, "a.png");
}
