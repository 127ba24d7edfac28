//! Hydration layer - loads every table from SQLite into a `Store`
//!
//! Ids are preserved, and each table's sequence is advanced to what SQLite
//! last issued so ids the store assigns afterwards never collide with rows
//! that were deleted in the database.

use picto_core::model::Entity;
use picto_core::ops::Store;
use rusqlite::Connection;

use crate::errors::Result;
use crate::repo::SqliteRepo;

/// Load the whole database into a fresh Store
pub fn load_store(conn: &Connection) -> Result<Store> {
    let mut store = Store::new();

    for user in SqliteRepo::list_users(conn)? {
        store.restore_user(user);
    }
    for post in SqliteRepo::list_posts(conn)? {
        store.restore_post(post);
    }
    for comment in SqliteRepo::list_comments(conn)? {
        store.restore_comment(comment);
    }
    for media in SqliteRepo::list_media(conn)? {
        store.restore_media(media);
    }
    for edge in SqliteRepo::list_follows(conn)? {
        store.restore_follow(edge);
    }

    for entity in [Entity::User, Entity::Post, Entity::Comment, Entity::Media] {
        if let Some(last) = SqliteRepo::last_issued_id(conn, entity)? {
            store.advance_sequence(entity, last);
        }
    }

    tracing::debug!(
        users = store.count(Entity::User),
        posts = store.count(Entity::Post),
        comments = store.count(Entity::Comment),
        media = store.count(Entity::Media),
        follows = store.count(Entity::Follower),
        "hydrated store"
    );
    Ok(store)
}
