pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod record;
pub mod user;

pub use comment::{Comment, CommentPatch, NewComment};
pub use follower::Follower;
pub use media::{Media, MediaPatch, NewMedia};
pub use post::{NewPost, Post, PostPatch};
pub use record::{Record, ToRecord};
pub use user::{NewUser, User, UserPatch};

pub type UserId = i64;
pub type PostId = i64;
pub type CommentId = i64;
pub type MediaId = i64;

/// The five persisted entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entity {
    User,
    Post,
    Comment,
    Media,
    Follower,
}

impl Entity {
    pub const ALL: [Entity; 5] = [
        Entity::User,
        Entity::Post,
        Entity::Comment,
        Entity::Media,
        Entity::Follower,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::User => "user",
            Entity::Post => "post",
            Entity::Comment => "comment",
            Entity::Media => "media",
            Entity::Follower => "follower",
        }
    }

    /// SQL table backing this entity
    pub fn table(&self) -> &'static str {
        match self {
            Entity::User => "users",
            Entity::Post => "posts",
            Entity::Comment => "comments",
            Entity::Media => "media",
            Entity::Follower => "followers",
        }
    }

    pub fn from_table(table: &str) -> Option<Entity> {
        Entity::ALL.into_iter().find(|e| e.table() == table)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
