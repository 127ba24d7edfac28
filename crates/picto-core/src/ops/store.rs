use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::errors::{PictoError, Result};
use crate::model::{
    Comment, CommentId, Entity, Follower, Media, MediaId, Post, PostId, User, UserId,
};

/// Last id issued per table; ids are never reused after a delete
#[derive(Debug, Clone, Default)]
pub(crate) struct Sequences {
    pub(crate) user: i64,
    pub(crate) post: i64,
    pub(crate) comment: i64,
    pub(crate) media: i64,
}

impl Sequences {
    fn slot(&mut self, entity: Entity) -> Option<&mut i64> {
        match entity {
            Entity::User => Some(&mut self.user),
            Entity::Post => Some(&mut self.post),
            Entity::Comment => Some(&mut self.comment),
            Entity::Media => Some(&mut self.media),
            Entity::Follower => None,
        }
    }
}

/// In-memory table store
///
/// One id-keyed table per entity plus unique indexes for username and
/// email. Relationships are plain foreign-key fields; reverse navigation
/// goes through `crate::queries`. Single-threaded by design (`&mut self`).
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) posts: BTreeMap<PostId, Post>,
    pub(crate) comments: BTreeMap<CommentId, Comment>,
    pub(crate) media: BTreeMap<MediaId, Media>,
    pub(crate) follows: BTreeSet<Follower>,
    pub(crate) usernames: HashMap<String, UserId>,
    pub(crate) emails: HashMap<String, UserId>,
    pub(crate) sequences: Sequences,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `UserNotFound` if no row has this id.
    pub fn get_user(&self, id: UserId) -> Result<&User> {
        self.users
            .get(&id)
            .ok_or(PictoError::UserNotFound { user_id: id })
    }

    pub(crate) fn get_user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.users
            .get_mut(&id)
            .ok_or(PictoError::UserNotFound { user_id: id })
    }

    /// # Errors
    ///
    /// Returns `PostNotFound` if no row has this id.
    pub fn get_post(&self, id: PostId) -> Result<&Post> {
        self.posts
            .get(&id)
            .ok_or(PictoError::PostNotFound { post_id: id })
    }

    pub(crate) fn get_post_mut(&mut self, id: PostId) -> Result<&mut Post> {
        self.posts
            .get_mut(&id)
            .ok_or(PictoError::PostNotFound { post_id: id })
    }

    /// # Errors
    ///
    /// Returns `CommentNotFound` if no row has this id.
    pub fn get_comment(&self, id: CommentId) -> Result<&Comment> {
        self.comments
            .get(&id)
            .ok_or(PictoError::CommentNotFound { comment_id: id })
    }

    pub(crate) fn get_comment_mut(&mut self, id: CommentId) -> Result<&mut Comment> {
        self.comments
            .get_mut(&id)
            .ok_or(PictoError::CommentNotFound { comment_id: id })
    }

    /// # Errors
    ///
    /// Returns `MediaNotFound` if no row has this id.
    pub fn get_media(&self, id: MediaId) -> Result<&Media> {
        self.media
            .get(&id)
            .ok_or(PictoError::MediaNotFound { media_id: id })
    }

    pub(crate) fn get_media_mut(&mut self, id: MediaId) -> Result<&mut Media> {
        self.media
            .get_mut(&id)
            .ok_or(PictoError::MediaNotFound { media_id: id })
    }

    pub fn contains_follow(&self, edge: &Follower) -> bool {
        self.follows.contains(edge)
    }

    /// Row count of one table
    pub fn count(&self, entity: Entity) -> usize {
        match entity {
            Entity::User => self.users.len(),
            Entity::Post => self.posts.len(),
            Entity::Comment => self.comments.len(),
            Entity::Media => self.media.len(),
            Entity::Follower => self.follows.len(),
        }
    }

    pub(crate) fn next_id(&mut self, entity: Entity) -> i64 {
        match self.sequences.slot(entity) {
            Some(last) => {
                *last += 1;
                *last
            }
            None => 0,
        }
    }

    /// Raise a table's sequence so the next issued id is above `last_issued`
    ///
    /// Used when hydrating from a database whose sequence ran ahead of the
    /// highest surviving id. Never lowers a sequence.
    pub fn advance_sequence(&mut self, entity: Entity, last_issued: i64) {
        if let Some(last) = self.sequences.slot(entity) {
            *last = (*last).max(last_issued);
        }
    }

    // ===== Raw row restore (hydration) =====
    //
    // These bypass reference checks; rows come from a database that already
    // enforced them. Unique indexes and sequences are kept in step.

    pub fn restore_user(&mut self, user: User) {
        self.advance_sequence(Entity::User, user.id);
        self.usernames.insert(user.username.clone(), user.id);
        self.emails.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user);
    }

    pub fn restore_post(&mut self, post: Post) {
        self.advance_sequence(Entity::Post, post.id);
        self.posts.insert(post.id, post);
    }

    pub fn restore_comment(&mut self, comment: Comment) {
        self.advance_sequence(Entity::Comment, comment.id);
        self.comments.insert(comment.id, comment);
    }

    pub fn restore_media(&mut self, media: Media) {
        self.advance_sequence(Entity::Media, media.id);
        self.media.insert(media.id, media);
    }

    pub fn restore_follow(&mut self, edge: Follower) {
        self.follows.insert(edge);
    }
}
