// Integration tests for user command handlers.

mod common;

use common::{add_post, add_user, setup_db};
use picto_core::model::{Entity, NewComment, NewUser, UserPatch};
use picto_core::ExErrorKind;
use picto_engine::commands::comment::{comment_create, comments_by_author};
use picto_engine::commands::post::posts_by_user;
use picto_engine::commands::user::{
    user_create, user_delete, user_get, user_get_by_email, user_get_by_username, user_list,
    user_update,
};

// ---------------------------------------------------------------------------
// user_create
// ---------------------------------------------------------------------------

#[test]
fn test_user_create_assigns_sequential_ids() {
    let (_tmp, conn) = setup_db();

    let alice = user_create(&conn, NewUser::new("alice", "a@x.com", "h1")).unwrap();
    let bob = user_create(&conn, NewUser::new("bob", "b@x.com", "h2")).unwrap();

    assert_eq!((alice, bob), (1, 2));
}

#[test]
fn test_user_create_duplicate_username() {
    let (_tmp, conn) = setup_db();
    add_user(&conn, "alice");

    let err = user_create(&conn, NewUser::new("alice", "other@x.com", "pw")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.field(), Some("username"));
    assert_eq!(err.op(), Some("user_create"));
}

#[test]
fn test_user_create_duplicate_email() {
    let (_tmp, conn) = setup_db();
    add_user(&conn, "alice");

    let err = user_create(&conn, NewUser::new("alicia", "alice@x.com", "pw")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.field(), Some("email"));
}

#[test]
fn test_user_create_username_too_long() {
    let (_tmp, conn) = setup_db();

    let err = user_create(&conn, NewUser::new("u".repeat(51), "a@x.com", "pw")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.entity(), Some(Entity::User));
    assert_eq!(err.field(), Some("username"));
    assert!(user_list(&conn).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// reads
// ---------------------------------------------------------------------------

#[test]
fn test_user_lookups() {
    let (_tmp, conn) = setup_db();
    let id = user_create(
        &conn,
        NewUser::new("alice", "a@x.com", "h1").with_firstname("Alice"),
    )
    .unwrap();

    assert_eq!(user_get(&conn, id).unwrap().firstname.as_deref(), Some("Alice"));
    assert_eq!(user_get_by_username(&conn, "alice").unwrap().id, id);
    assert_eq!(user_get_by_email(&conn, "a@x.com").unwrap().id, id);
}

#[test]
fn test_user_lookup_misses_are_not_found() {
    let (_tmp, conn) = setup_db();

    for err in [
        user_get(&conn, 9).unwrap_err(),
        user_get_by_username(&conn, "ghost").unwrap_err(),
        user_get_by_email(&conn, "ghost@x.com").unwrap_err(),
    ] {
        assert_eq!(err.kind(), ExErrorKind::NotFound);
    }
}

// ---------------------------------------------------------------------------
// user_update
// ---------------------------------------------------------------------------

#[test]
fn test_user_update_changes_fields() {
    let (_tmp, mut conn) = setup_db();
    let id = add_user(&conn, "alice");

    let updated = user_update(
        &mut conn,
        id,
        UserPatch {
            username: Some("alice2".to_string()),
            lastname: Some(Some("Liddell".to_string())),
            ..UserPatch::default()
        },
    )
    .unwrap();

    assert_eq!(updated.username, "alice2");
    assert_eq!(updated.lastname.as_deref(), Some("Liddell"));
    assert_eq!(user_get_by_username(&conn, "alice2").unwrap().id, id);
    assert!(user_get_by_username(&conn, "alice").is_err());
}

#[test]
fn test_user_update_keeping_own_email_is_fine() {
    let (_tmp, mut conn) = setup_db();
    let id = add_user(&conn, "alice");

    let patch = UserPatch {
        email: Some("alice@x.com".to_string()),
        ..UserPatch::default()
    };
    assert!(user_update(&mut conn, id, patch).is_ok());
}

#[test]
fn test_user_update_taking_anothers_username_fails() {
    let (_tmp, mut conn) = setup_db();
    add_user(&conn, "alice");
    let bob = add_user(&conn, "bob");

    let patch = UserPatch {
        username: Some("alice".to_string()),
        ..UserPatch::default()
    };
    let err = user_update(&mut conn, bob, patch).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(user_get(&conn, bob).unwrap().username, "bob");
}

#[test]
fn test_user_update_missing_user() {
    let (_tmp, mut conn) = setup_db();
    let err = user_update(&mut conn, 5, UserPatch::default()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

// ---------------------------------------------------------------------------
// user_delete
// ---------------------------------------------------------------------------

#[test]
fn test_user_delete_cascades_to_posts_and_comments() {
    let (_tmp, conn) = setup_db();
    let alice = add_user(&conn, "alice");
    let bob = add_user(&conn, "bob");
    let bobs_post = add_post(&conn, bob, "mine");
    add_post(&conn, alice, "hi");
    comment_create(&conn, NewComment::new(alice, bobs_post, "nice")).unwrap();

    user_delete(&conn, alice).unwrap();

    assert!(posts_by_user(&conn, alice).unwrap().is_empty());
    assert!(comments_by_author(&conn, alice).unwrap().is_empty());
    assert_eq!(posts_by_user(&conn, bob).unwrap().len(), 1);
}

#[test]
fn test_user_ids_are_not_reused_after_delete() {
    let (_tmp, conn) = setup_db();
    add_user(&conn, "alice");
    let bob = add_user(&conn, "bob");

    user_delete(&conn, bob).unwrap();
    let carol = add_user(&conn, "carol");

    assert_eq!(carol, 3);
    assert_eq!(user_get(&conn, carol).unwrap().username, "carol");
}

#[test]
fn test_user_delete_missing_user() {
    let (_tmp, conn) = setup_db();
    let err = user_delete(&conn, 1).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity(), Some(Entity::User));
}

#[test]
fn test_serialized_user_has_no_password() {
    let (_tmp, conn) = setup_db();
    let id = add_user(&conn, "alice");

    let user = user_get(&conn, id).unwrap();
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password").is_none());
    assert_eq!(json["username"], "alice");
}
