//! Seed importer orchestration
//!
//! A seed is applied twice through the same key-resolution walk: first onto
//! a `Store` hydrated from the database, which surfaces every uniqueness,
//! length, reference and self-follow problem without touching SQLite; then
//! onto a transaction, which persists it. Either all rows land or none do.

use std::collections::BTreeMap;
use std::path::Path;

use picto_core::model::{
    Entity, Follower, NewComment, NewMedia, NewPost, NewUser, PostId, UserId,
};
use picto_core::ops::{comment_ops, follower_ops, media_ops, post_ops, user_ops, Store};
use picto_core::{ExError, ExErrorKind, PictoError};
use rusqlite::Connection;
use serde::Serialize;

use crate::errors::{from_rusqlite, Result};
use crate::repo::hydration::load_store;
use crate::repo::SqliteRepo;
use crate::seed::format_v0::SeedV0;
use crate::seed::parser::{parse_seed_file, parse_seed_str};

/// What an import created, keyed by seed-local keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users: BTreeMap<String, UserId>,
    pub posts: BTreeMap<String, PostId>,
    pub comments: usize,
    pub media: usize,
    pub follows: usize,
}

/// Import a seed file into the database
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<SeedReport> {
    let seed = parse_seed_file(path)?;
    import_parsed(&seed, conn)
}

/// Import a seed held in memory
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<SeedReport> {
    let seed = parse_seed_str(content)?;
    import_parsed(&seed, conn)
}

fn import_parsed(seed: &SeedV0, conn: &mut Connection) -> Result<SeedReport> {
    let mut staged = load_store(conn)?;
    apply_seed(seed, &mut staged)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let report = apply_seed(seed, &mut SqlSink { conn: &tx })?;
    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(
        users = report.users.len(),
        posts = report.posts.len(),
        comments = report.comments,
        media = report.media,
        follows = report.follows,
        "imported seed"
    );
    Ok(report)
}

/// Destination for seed rows
trait SeedSink {
    fn add_user(&mut self, user: NewUser) -> Result<UserId>;
    fn add_post(&mut self, post: NewPost) -> Result<PostId>;
    fn add_comment(&mut self, comment: NewComment) -> Result<()>;
    fn add_media(&mut self, media: NewMedia) -> Result<()>;
    fn add_follow(&mut self, edge: Follower) -> Result<()>;
    fn user_by_username(&self, username: &str) -> Result<Option<UserId>>;
}

impl SeedSink for Store {
    fn add_user(&mut self, user: NewUser) -> Result<UserId> {
        user_ops::create_user(self, user).map_err(staging_error)
    }

    fn add_post(&mut self, post: NewPost) -> Result<PostId> {
        post_ops::create_post(self, post).map_err(staging_error)
    }

    fn add_comment(&mut self, comment: NewComment) -> Result<()> {
        comment_ops::create_comment(self, comment)
            .map(|_| ())
            .map_err(staging_error)
    }

    fn add_media(&mut self, media: NewMedia) -> Result<()> {
        media_ops::create_media(self, media)
            .map(|_| ())
            .map_err(staging_error)
    }

    fn add_follow(&mut self, edge: Follower) -> Result<()> {
        follower_ops::follow(self, edge).map_err(staging_error)
    }

    fn user_by_username(&self, username: &str) -> Result<Option<UserId>> {
        Ok(user_ops::find_user_by_username(self, username)
            .ok()
            .map(|u| u.id))
    }
}

struct SqlSink<'a> {
    conn: &'a Connection,
}

impl SeedSink for SqlSink<'_> {
    fn add_user(&mut self, user: NewUser) -> Result<UserId> {
        SqliteRepo::insert_user(self.conn, &user)
    }

    fn add_post(&mut self, post: NewPost) -> Result<PostId> {
        SqliteRepo::insert_post(self.conn, &post)
    }

    fn add_comment(&mut self, comment: NewComment) -> Result<()> {
        SqliteRepo::insert_comment(self.conn, &comment).map(|_| ())
    }

    fn add_media(&mut self, media: NewMedia) -> Result<()> {
        SqliteRepo::insert_media(self.conn, &media).map(|_| ())
    }

    fn add_follow(&mut self, edge: Follower) -> Result<()> {
        SqliteRepo::insert_follow(self.conn, edge)
    }

    fn user_by_username(&self, username: &str) -> Result<Option<UserId>> {
        Ok(SqliteRepo::find_user_by_username(self.conn, username)?.map(|u| u.id))
    }
}

fn apply_seed<S: SeedSink>(seed: &SeedV0, sink: &mut S) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for user in &seed.users {
        let mut new = NewUser::new(&user.username, &user.email, user.password.expose());
        new.firstname = user.firstname.clone();
        new.lastname = user.lastname.clone();
        let id = sink.add_user(new)?;
        report.users.insert(user.key.clone(), id);
    }

    for (i, post) in seed.posts.iter().enumerate() {
        let owner = resolve_user(sink, &report, &post.user, Entity::Post, "user_id", i)?;
        let new = NewPost {
            user_id: owner,
            image: post.image.clone(),
            caption: post.caption.clone(),
        };
        let id = sink.add_post(new)?;
        report.posts.insert(post.key.clone(), id);
    }

    for (i, comment) in seed.comments.iter().enumerate() {
        let author = resolve_user(sink, &report, &comment.author, Entity::Comment, "author_id", i)?;
        let post = resolve_post(&report, &comment.post, Entity::Comment, i)?;
        sink.add_comment(NewComment::new(author, post, &comment.text))?;
        report.comments += 1;
    }

    for (i, media) in seed.media.iter().enumerate() {
        let post = resolve_post(&report, &media.post, Entity::Media, i)?;
        sink.add_media(NewMedia::new(post, &media.media_type, &media.url))?;
        report.media += 1;
    }

    for (i, follow) in seed.follows.iter().enumerate() {
        let follower =
            resolve_user(sink, &report, &follow.follower, Entity::Follower, "follower_id", i)?;
        let followed =
            resolve_user(sink, &report, &follow.followed, Entity::Follower, "followed_id", i)?;
        sink.add_follow(Follower::new(follower, followed))?;
        report.follows += 1;
    }

    Ok(report)
}

/// Seed key first, then an existing username
fn resolve_user<S: SeedSink>(
    sink: &S,
    report: &SeedReport,
    reference: &str,
    entity: Entity,
    field: &str,
    index: usize,
) -> Result<UserId> {
    if let Some(id) = report.users.get(reference) {
        return Ok(*id);
    }
    sink.user_by_username(reference)?
        .ok_or_else(|| unresolved(entity, field, index, "user", reference))
}

fn resolve_post(report: &SeedReport, key: &str, entity: Entity, index: usize) -> Result<PostId> {
    report
        .posts
        .get(key)
        .copied()
        .ok_or_else(|| unresolved(entity, "post_id", index, "post", key))
}

fn unresolved(entity: Entity, field: &str, index: usize, target: &str, key: &str) -> ExError {
    ExError::new(ExErrorKind::ReferenceError)
        .with_op("seed_import")
        .with_entity(entity)
        .with_field(field.to_string())
        .with_message(format!(
            "{}[{}] references unknown {} '{}'",
            entity.table(),
            index,
            target,
            key
        ))
}

fn staging_error(err: PictoError) -> ExError {
    ExError::from(err).with_op("seed_import")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;
    use std::path::PathBuf;

    const ALICE_SEED: &str = "schema_version: 0
users:
  - { key: a, username: alice, email: a@x.com, password: h1 }
";

    fn setup_test_db() -> Connection {
        let mut conn = crate::db::open_in_memory().unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    #[test]
    fn test_import_basic_seed() {
        let mut conn = setup_test_db();
        let report = import_seed(&fixtures_dir().join("seed_basic.yaml"), &mut conn).unwrap();

        assert_eq!(report.users.len(), 3);
        assert_eq!(report.users["alice"], 1);
        assert_eq!(report.posts.len(), 2);
        assert_eq!(report.comments, 2);
        assert_eq!(report.media, 1);
        assert_eq!(report.follows, 3);

        assert_eq!(SqliteRepo::count(&conn, Entity::User).unwrap(), 3);
        assert_eq!(SqliteRepo::count(&conn, Entity::Follower).unwrap(), 3);
    }

    #[test]
    fn test_unknown_post_key_is_reference_error() {
        let mut conn = setup_test_db();
        let yaml = r#"
schema_version: 0
users:
  - { key: a, username: alice, email: a@x.com, password: h1 }
comments:
  - { author: a, post: missing, text: hello }
"#;
        let err = import_seed_str(yaml, &mut conn).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ReferenceError);
        assert_eq!(err.entity(), Some(Entity::Comment));
        assert_eq!(err.field(), Some("post_id"));
        // staging failed, nothing was written
        assert_eq!(SqliteRepo::count(&conn, Entity::User).unwrap(), 0);
    }

    #[test]
    fn test_user_reference_by_existing_username() {
        let mut conn = setup_test_db();
        import_seed_str(ALICE_SEED, &mut conn).unwrap();

        let report = import_seed_str(
            "schema_version: 0\nposts:\n  - { key: p, user: alice, caption: hi }\n",
            &mut conn,
        )
        .unwrap();

        let post = SqliteRepo::get_post(&conn, report.posts["p"]).unwrap().unwrap();
        assert_eq!(post.user_id, 1);
    }

    #[test]
    fn test_duplicate_against_existing_rows() {
        let mut conn = setup_test_db();
        import_seed_str(ALICE_SEED, &mut conn).unwrap();

        let err = import_seed_str(ALICE_SEED, &mut conn).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert_eq!(err.field(), Some("username"));
        assert_eq!(err.op(), Some("seed_import"));
    }

    #[test]
    fn test_self_follow_in_seed_rejected() {
        let mut conn = setup_test_db();
        let yaml = r#"
schema_version: 0
users:
  - { key: a, username: alice, email: a@x.com, password: h1 }
follows:
  - { follower: a, followed: a }
"#;
        let err = import_seed_str(yaml, &mut conn).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert_eq!(err.entity(), Some(Entity::Follower));
        assert_eq!(SqliteRepo::count(&conn, Entity::User).unwrap(), 0);
    }
}
