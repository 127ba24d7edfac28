#![allow(dead_code)]

use picto_core::model::{NewPost, NewUser, PostId, UserId};
use picto_engine::commands::{post, user};
use rusqlite::Connection;
use tempfile::TempDir;

pub fn setup_db() -> (TempDir, Connection) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let mut conn = picto_store::db::open(&db_path).unwrap();
    picto_store::migrations::apply_migrations(&mut conn).unwrap();
    (temp_dir, conn)
}

pub fn add_user(conn: &Connection, username: &str) -> UserId {
    user::user_create(
        conn,
        NewUser::new(username, format!("{}@x.com", username), "pw"),
    )
    .unwrap()
}

pub fn add_post(conn: &Connection, owner: UserId, caption: &str) -> PostId {
    post::post_create(conn, NewPost::new(owner).with_caption(caption)).unwrap()
}
