//! SQLite repository implementation
//!
//! One associated function per statement. Every function takes a
//! `&Connection`, so callers can pass a `Transaction` (it derefs to one)
//! and group several statements atomically.
//!
//! Constraint failures come back already classified by
//! `crate::errors::from_rusqlite`; cascades are left to the schema's
//! `ON DELETE CASCADE` clauses.

use picto_core::model::{
    Comment, CommentId, Entity, Follower, Media, MediaId, NewComment, NewMedia, NewPost, NewUser,
    Post, PostId, User, UserId,
};
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

use crate::errors::{from_rusqlite, Result};

const USER_COLUMNS: &str = "id, username, firstname, lastname, email, password";
const POST_COLUMNS: &str = "id, user_id, image, caption";
const COMMENT_COLUMNS: &str = "id, comment_text, author_id, post_id";
const MEDIA_COLUMNS: &str = "id, type, url, post_id";

/// SQLite repository for the social schema
pub struct SqliteRepo;

impl SqliteRepo {
    // ===== Users =====

    pub fn insert_user(conn: &Connection, user: &NewUser) -> Result<UserId> {
        conn.execute(
            "INSERT INTO users (username, firstname, lastname, email, password)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user.username,
                user.firstname,
                user.lastname,
                user.email,
                user.password.expose(),
            ],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(user_id = id, "inserted user");
        Ok(id)
    }

    /// Insert a row whose id the in-memory store already assigned
    pub fn persist_user(conn: &Connection, user: &User) -> Result<()> {
        conn.execute(
            "INSERT INTO users (id, username, firstname, lastname, email, password)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user.id,
                user.username,
                user.firstname,
                user.lastname,
                user.email,
                user.password.expose(),
            ],
        )
        .map_err(from_rusqlite)?;
        tracing::debug!(user_id = user.id, "persisted user");
        Ok(())
    }

    pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
        query_one(
            conn,
            &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
            [id],
            user_from_row,
        )
    }

    pub fn find_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
        query_one(
            conn,
            &format!("SELECT {} FROM users WHERE username = ?1", USER_COLUMNS),
            [username],
            user_from_row,
        )
    }

    pub fn find_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
        query_one(
            conn,
            &format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS),
            [email],
            user_from_row,
        )
    }

    /// Write every column of an existing row; false if the id is unknown
    pub fn update_user(conn: &Connection, user: &User) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE users
                 SET username = ?2, firstname = ?3, lastname = ?4, email = ?5, password = ?6
                 WHERE id = ?1",
                params![
                    user.id,
                    user.username,
                    user.firstname,
                    user.lastname,
                    user.email,
                    user.password.expose(),
                ],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Delete a user; posts, comments and follow edges go with it
    pub fn delete_user(conn: &Connection, id: UserId) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM users WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tracing::debug!(user_id = id, deleted = changed > 0, "delete user");
        Ok(changed > 0)
    }

    pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
        query_all(
            conn,
            &format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS),
            [],
            user_from_row,
        )
    }

    // ===== Posts =====

    pub fn insert_post(conn: &Connection, post: &NewPost) -> Result<PostId> {
        conn.execute(
            "INSERT INTO posts (user_id, image, caption) VALUES (?1, ?2, ?3)",
            params![post.user_id, post.image, post.caption],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(post_id = id, user_id = post.user_id, "inserted post");
        Ok(id)
    }

    pub fn persist_post(conn: &Connection, post: &Post) -> Result<()> {
        conn.execute(
            "INSERT INTO posts (id, user_id, image, caption) VALUES (?1, ?2, ?3, ?4)",
            params![post.id, post.user_id, post.image, post.caption],
        )
        .map_err(from_rusqlite)?;
        tracing::debug!(post_id = post.id, user_id = post.user_id, "persisted post");
        Ok(())
    }

    pub fn get_post(conn: &Connection, id: PostId) -> Result<Option<Post>> {
        query_one(
            conn,
            &format!("SELECT {} FROM posts WHERE id = ?1", POST_COLUMNS),
            [id],
            post_from_row,
        )
    }

    pub fn update_post(conn: &Connection, post: &Post) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE posts SET user_id = ?2, image = ?3, caption = ?4 WHERE id = ?1",
                params![post.id, post.user_id, post.image, post.caption],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Delete a post; its comments and media go with it
    pub fn delete_post(conn: &Connection, id: PostId) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM posts WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tracing::debug!(post_id = id, deleted = changed > 0, "delete post");
        Ok(changed > 0)
    }

    pub fn list_posts(conn: &Connection) -> Result<Vec<Post>> {
        query_all(
            conn,
            &format!("SELECT {} FROM posts ORDER BY id", POST_COLUMNS),
            [],
            post_from_row,
        )
    }

    pub fn posts_by_user(conn: &Connection, user_id: UserId) -> Result<Vec<Post>> {
        query_all(
            conn,
            &format!(
                "SELECT {} FROM posts WHERE user_id = ?1 ORDER BY id",
                POST_COLUMNS
            ),
            [user_id],
            post_from_row,
        )
    }

    // ===== Comments =====

    pub fn insert_comment(conn: &Connection, comment: &NewComment) -> Result<CommentId> {
        conn.execute(
            "INSERT INTO comments (comment_text, author_id, post_id) VALUES (?1, ?2, ?3)",
            params![comment.comment_text, comment.author_id, comment.post_id],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(comment_id = id, post_id = comment.post_id, "inserted comment");
        Ok(id)
    }

    pub fn persist_comment(conn: &Connection, comment: &Comment) -> Result<()> {
        conn.execute(
            "INSERT INTO comments (id, comment_text, author_id, post_id) VALUES (?1, ?2, ?3, ?4)",
            params![
                comment.id,
                comment.comment_text,
                comment.author_id,
                comment.post_id
            ],
        )
        .map_err(from_rusqlite)?;
        tracing::debug!(comment_id = comment.id, post_id = comment.post_id, "persisted comment");
        Ok(())
    }

    pub fn get_comment(conn: &Connection, id: CommentId) -> Result<Option<Comment>> {
        query_one(
            conn,
            &format!("SELECT {} FROM comments WHERE id = ?1", COMMENT_COLUMNS),
            [id],
            comment_from_row,
        )
    }

    pub fn update_comment(conn: &Connection, comment: &Comment) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE comments SET comment_text = ?2, author_id = ?3, post_id = ?4 WHERE id = ?1",
                params![
                    comment.id,
                    comment.comment_text,
                    comment.author_id,
                    comment.post_id
                ],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    pub fn delete_comment(conn: &Connection, id: CommentId) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM comments WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    pub fn list_comments(conn: &Connection) -> Result<Vec<Comment>> {
        query_all(
            conn,
            &format!("SELECT {} FROM comments ORDER BY id", COMMENT_COLUMNS),
            [],
            comment_from_row,
        )
    }

    pub fn comments_by_author(conn: &Connection, user_id: UserId) -> Result<Vec<Comment>> {
        query_all(
            conn,
            &format!(
                "SELECT {} FROM comments WHERE author_id = ?1 ORDER BY id",
                COMMENT_COLUMNS
            ),
            [user_id],
            comment_from_row,
        )
    }

    pub fn comments_on_post(conn: &Connection, post_id: PostId) -> Result<Vec<Comment>> {
        query_all(
            conn,
            &format!(
                "SELECT {} FROM comments WHERE post_id = ?1 ORDER BY id",
                COMMENT_COLUMNS
            ),
            [post_id],
            comment_from_row,
        )
    }

    // ===== Media =====

    pub fn insert_media(conn: &Connection, media: &NewMedia) -> Result<MediaId> {
        conn.execute(
            "INSERT INTO media (type, url, post_id) VALUES (?1, ?2, ?3)",
            params![media.media_type, media.url, media.post_id],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(media_id = id, post_id = media.post_id, "inserted media");
        Ok(id)
    }

    pub fn persist_media(conn: &Connection, media: &Media) -> Result<()> {
        conn.execute(
            "INSERT INTO media (id, type, url, post_id) VALUES (?1, ?2, ?3, ?4)",
            params![media.id, media.media_type, media.url, media.post_id],
        )
        .map_err(from_rusqlite)?;
        tracing::debug!(media_id = media.id, post_id = media.post_id, "persisted media");
        Ok(())
    }

    pub fn get_media(conn: &Connection, id: MediaId) -> Result<Option<Media>> {
        query_one(
            conn,
            &format!("SELECT {} FROM media WHERE id = ?1", MEDIA_COLUMNS),
            [id],
            media_from_row,
        )
    }

    pub fn update_media(conn: &Connection, media: &Media) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE media SET type = ?2, url = ?3, post_id = ?4 WHERE id = ?1",
                params![media.id, media.media_type, media.url, media.post_id],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    pub fn delete_media(conn: &Connection, id: MediaId) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM media WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    pub fn list_media(conn: &Connection) -> Result<Vec<Media>> {
        query_all(
            conn,
            &format!("SELECT {} FROM media ORDER BY id", MEDIA_COLUMNS),
            [],
            media_from_row,
        )
    }

    pub fn media_for_post(conn: &Connection, post_id: PostId) -> Result<Vec<Media>> {
        query_all(
            conn,
            &format!(
                "SELECT {} FROM media WHERE post_id = ?1 ORDER BY id",
                MEDIA_COLUMNS
            ),
            [post_id],
            media_from_row,
        )
    }

    // ===== Follow edges =====

    pub fn insert_follow(conn: &Connection, edge: Follower) -> Result<()> {
        conn.execute(
            "INSERT INTO followers (follower_id, followed_id) VALUES (?1, ?2)",
            params![edge.follower_id, edge.followed_id],
        )
        .map_err(from_rusqlite)?;
        tracing::debug!(
            follower_id = edge.follower_id,
            followed_id = edge.followed_id,
            "inserted follow"
        );
        Ok(())
    }

    pub fn follow_exists(conn: &Connection, edge: Follower) -> Result<bool> {
        let found = conn
            .query_row(
                "SELECT 1 FROM followers WHERE follower_id = ?1 AND followed_id = ?2",
                params![edge.follower_id, edge.followed_id],
                |_| Ok(()),
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(found.is_some())
    }

    pub fn delete_follow(conn: &Connection, edge: Follower) -> Result<bool> {
        let changed = conn
            .execute(
                "DELETE FROM followers WHERE follower_id = ?1 AND followed_id = ?2",
                params![edge.follower_id, edge.followed_id],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    pub fn list_follows(conn: &Connection) -> Result<Vec<Follower>> {
        query_all(
            conn,
            "SELECT follower_id, followed_id FROM followers ORDER BY follower_id, followed_id",
            [],
            follower_from_row,
        )
    }

    /// Edges pointing at `user_id`, ordered by follower
    pub fn followers_of(conn: &Connection, user_id: UserId) -> Result<Vec<Follower>> {
        query_all(
            conn,
            "SELECT follower_id, followed_id FROM followers
             WHERE followed_id = ?1 ORDER BY follower_id",
            [user_id],
            follower_from_row,
        )
    }

    /// Edges leaving `user_id`, ordered by the followed user
    pub fn following_of(conn: &Connection, user_id: UserId) -> Result<Vec<Follower>> {
        query_all(
            conn,
            "SELECT follower_id, followed_id FROM followers
             WHERE follower_id = ?1 ORDER BY followed_id",
            [user_id],
            follower_from_row,
        )
    }

    // ===== Shared =====

    pub fn count(conn: &Connection, entity: Entity) -> Result<usize> {
        let n: i64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM {}", entity.table()),
                [],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;
        Ok(n as usize)
    }

    /// Last id AUTOINCREMENT handed out for a table (survives deletes)
    pub fn last_issued_id(conn: &Connection, entity: Entity) -> Result<Option<i64>> {
        // sqlite_sequence only exists once some AUTOINCREMENT table saw an insert
        let seq = conn
            .query_row(
                "SELECT seq FROM sqlite_sequence WHERE name = ?1",
                [entity.table()],
                |row| row.get(0),
            )
            .optional();
        match seq {
            Ok(v) => Ok(v),
            Err(rusqlite::Error::SqliteFailure(_, Some(msg))) if msg.contains("no such table") => {
                Ok(None)
            }
            Err(e) => Err(from_rusqlite(e)),
        }
    }
}

fn query_one<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Option<T>>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    conn.query_row(sql, params, map)
        .optional()
        .map_err(from_rusqlite)
}

fn query_all<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        firstname: row.get(2)?,
        lastname: row.get(3)?,
        email: row.get(4)?,
        password: row.get::<_, String>(5)?.into(),
    })
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        user_id: row.get(1)?,
        image: row.get(2)?,
        caption: row.get(3)?,
    })
}

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        comment_text: row.get(1)?,
        author_id: row.get(2)?,
        post_id: row.get(3)?,
    })
}

fn media_from_row(row: &Row<'_>) -> rusqlite::Result<Media> {
    Ok(Media {
        id: row.get(0)?,
        media_type: row.get(1)?,
        url: row.get(2)?,
        post_id: row.get(3)?,
    })
}

fn follower_from_row(row: &Row<'_>) -> rusqlite::Result<Follower> {
    Ok(Follower::new(row.get(0)?, row.get(1)?))
}
