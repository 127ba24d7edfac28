// Integration tests for SQL-level table semantics: uniqueness, references,
// length checks and cascades, all enforced by SQLite itself.

use picto_core::model::{Entity, Follower, NewComment, NewMedia, NewPost, NewUser};
use picto_core::ExErrorKind;
use picto_store::repo::SqliteRepo;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = picto_store::db::open_in_memory().unwrap();
    picto_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn add_user(conn: &Connection, username: &str) -> i64 {
    SqliteRepo::insert_user(
        conn,
        &NewUser::new(username, format!("{}@x.com", username), "pw"),
    )
    .unwrap()
}

#[test]
fn test_worked_example() {
    // insert User{alice, a@x.com, h1} -> id 1; insert Post{1, "hi"} -> id 1
    let conn = setup_test_db();
    let alice = SqliteRepo::insert_user(&conn, &NewUser::new("alice", "a@x.com", "h1")).unwrap();
    let post = SqliteRepo::insert_post(&conn, &NewPost::new(alice).with_caption("hi")).unwrap();
    assert_eq!((alice, post), (1, 1));

    // delete User 1 -> Post 1 gone
    assert!(SqliteRepo::delete_user(&conn, alice).unwrap());
    assert_eq!(SqliteRepo::get_post(&conn, post).unwrap(), None);
}

#[test]
fn test_duplicate_username_violates_unique() {
    let conn = setup_test_db();
    add_user(&conn, "alice");

    let err = SqliteRepo::insert_user(&conn, &NewUser::new("alice", "other@x.com", "pw"))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.entity(), Some(Entity::User));
    assert_eq!(err.field(), Some("username"));
}

#[test]
fn test_duplicate_email_violates_unique() {
    let conn = setup_test_db();
    add_user(&conn, "alice");

    let err = SqliteRepo::insert_user(&conn, &NewUser::new("alicia", "alice@x.com", "pw"))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.field(), Some("email"));
}

#[test]
fn test_dangling_foreign_keys_are_reference_errors() {
    let conn = setup_test_db();

    let post_err = SqliteRepo::insert_post(&conn, &NewPost::new(42)).unwrap_err();
    assert_eq!(post_err.kind(), ExErrorKind::ReferenceError);

    let alice = add_user(&conn, "alice");
    let comment_err =
        SqliteRepo::insert_comment(&conn, &NewComment::new(alice, 7, "hello")).unwrap_err();
    assert_eq!(comment_err.kind(), ExErrorKind::ReferenceError);

    let media_err =
        SqliteRepo::insert_media(&conn, &NewMedia::new(7, "image", "https://x/1.jpg")).unwrap_err();
    assert_eq!(media_err.kind(), ExErrorKind::ReferenceError);
}

#[test]
fn test_column_length_check_names_field() {
    let conn = setup_test_db();
    let alice = add_user(&conn, "alice");
    let post = SqliteRepo::insert_post(&conn, &NewPost::new(alice)).unwrap();

    let err = SqliteRepo::insert_comment(&conn, &NewComment::new(alice, post, "x".repeat(251)))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.entity(), Some(Entity::Comment));
    assert_eq!(err.field(), Some("comment_text"));

    // Exactly at the limit is fine
    SqliteRepo::insert_comment(&conn, &NewComment::new(alice, post, "x".repeat(250))).unwrap();
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let conn = setup_test_db();
    // 50 two-byte characters
    let name = "é".repeat(50);
    SqliteRepo::insert_user(&conn, &NewUser::new(name, "e@x.com", "pw")).unwrap();
}

#[test]
fn test_follow_composite_key_and_self_follow() {
    let conn = setup_test_db();
    let a = add_user(&conn, "a");
    let b = add_user(&conn, "b");

    SqliteRepo::insert_follow(&conn, Follower::new(a, b)).unwrap();
    let dup = SqliteRepo::insert_follow(&conn, Follower::new(a, b)).unwrap_err();
    assert_eq!(dup.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(dup.entity(), Some(Entity::Follower));

    let own = SqliteRepo::insert_follow(&conn, Follower::new(a, a)).unwrap_err();
    assert_eq!(own.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(own.entity(), Some(Entity::Follower));

    // Reverse direction is a different edge
    SqliteRepo::insert_follow(&conn, Follower::new(b, a)).unwrap();
}

#[test]
fn test_user_delete_cascades_everywhere() {
    // Given: alice owns a post with media and a comment from bob; bob also
    // commented on his own post with alice's comment; follows both ways
    let conn = setup_test_db();
    let alice = add_user(&conn, "alice");
    let bob = add_user(&conn, "bob");
    let alice_post = SqliteRepo::insert_post(&conn, &NewPost::new(alice)).unwrap();
    let bob_post = SqliteRepo::insert_post(&conn, &NewPost::new(bob)).unwrap();
    SqliteRepo::insert_comment(&conn, &NewComment::new(bob, alice_post, "hey")).unwrap();
    SqliteRepo::insert_comment(&conn, &NewComment::new(alice, bob_post, "yo")).unwrap();
    SqliteRepo::insert_media(&conn, &NewMedia::new(alice_post, "image", "u")).unwrap();
    SqliteRepo::insert_follow(&conn, Follower::new(alice, bob)).unwrap();
    SqliteRepo::insert_follow(&conn, Follower::new(bob, alice)).unwrap();

    // When: alice is deleted
    assert!(SqliteRepo::delete_user(&conn, alice).unwrap());

    // Then: only bob and bob's post survive
    assert_eq!(SqliteRepo::count(&conn, Entity::User).unwrap(), 1);
    assert_eq!(SqliteRepo::list_posts(&conn).unwrap().len(), 1);
    assert_eq!(SqliteRepo::count(&conn, Entity::Comment).unwrap(), 0);
    assert_eq!(SqliteRepo::count(&conn, Entity::Media).unwrap(), 0);
    assert_eq!(SqliteRepo::count(&conn, Entity::Follower).unwrap(), 0);
}

#[test]
fn test_post_delete_cascades_to_comments_and_media() {
    let conn = setup_test_db();
    let alice = add_user(&conn, "alice");
    let keep = SqliteRepo::insert_post(&conn, &NewPost::new(alice)).unwrap();
    let gone = SqliteRepo::insert_post(&conn, &NewPost::new(alice)).unwrap();
    SqliteRepo::insert_comment(&conn, &NewComment::new(alice, gone, "a")).unwrap();
    SqliteRepo::insert_comment(&conn, &NewComment::new(alice, keep, "b")).unwrap();
    SqliteRepo::insert_media(&conn, &NewMedia::new(gone, "video", "v")).unwrap();

    SqliteRepo::delete_post(&conn, gone).unwrap();

    assert!(SqliteRepo::comments_on_post(&conn, gone).unwrap().is_empty());
    assert!(SqliteRepo::media_for_post(&conn, gone).unwrap().is_empty());
    assert_eq!(SqliteRepo::comments_on_post(&conn, keep).unwrap().len(), 1);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let conn = setup_test_db();
    let first = add_user(&conn, "a");
    SqliteRepo::delete_user(&conn, first).unwrap();

    let second = add_user(&conn, "b");
    assert_eq!(second, first + 1);
}

#[test]
fn test_update_user_breaching_unique_is_rejected() {
    let conn = setup_test_db();
    add_user(&conn, "alice");
    let bob = add_user(&conn, "bob");

    let mut row = SqliteRepo::get_user(&conn, bob).unwrap().unwrap();
    row.email = "alice@x.com".to_string();
    let err = SqliteRepo::update_user(&conn, &row).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.field(), Some("email"));
}

#[test]
fn test_lookups_by_unique_fields() {
    let conn = setup_test_db();
    let alice = add_user(&conn, "alice");

    let by_name = SqliteRepo::find_user_by_username(&conn, "alice").unwrap().unwrap();
    let by_email = SqliteRepo::find_user_by_email(&conn, "alice@x.com").unwrap().unwrap();
    assert_eq!(by_name.id, alice);
    assert_eq!(by_email.id, alice);
    assert_eq!(by_name.password.expose(), "pw");

    assert_eq!(SqliteRepo::find_user_by_username(&conn, "nobody").unwrap(), None);
}

#[test]
fn test_reverse_queries_ordering() {
    let conn = setup_test_db();
    let a = add_user(&conn, "a");
    let b = add_user(&conn, "b");
    let c = add_user(&conn, "c");
    SqliteRepo::insert_follow(&conn, Follower::new(c, a)).unwrap();
    SqliteRepo::insert_follow(&conn, Follower::new(b, a)).unwrap();
    SqliteRepo::insert_follow(&conn, Follower::new(a, c)).unwrap();

    let followers: Vec<i64> = SqliteRepo::followers_of(&conn, a)
        .unwrap()
        .iter()
        .map(|f| f.follower_id)
        .collect();
    assert_eq!(followers, vec![b, c]);

    let following = SqliteRepo::following_of(&conn, a).unwrap();
    assert_eq!(following, vec![Follower::new(a, c)]);

    assert!(SqliteRepo::posts_by_user(&conn, 99).unwrap().is_empty());
}
