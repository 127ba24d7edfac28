use crate::model::{Comment, Follower, Media, Post, PostId, User, UserId};
use crate::ops::Store;

/// All users, ordered by id
pub fn list_users(store: &Store) -> Vec<&User> {
    store.users.values().collect()
}

pub fn list_posts(store: &Store) -> Vec<&Post> {
    store.posts.values().collect()
}

pub fn list_comments(store: &Store) -> Vec<&Comment> {
    store.comments.values().collect()
}

pub fn list_media(store: &Store) -> Vec<&Media> {
    store.media.values().collect()
}

/// All follow edges, ordered by (follower_id, followed_id)
pub fn list_follows(store: &Store) -> Vec<Follower> {
    store.follows.iter().copied().collect()
}

/// Posts where `user_id = user`
pub fn posts_by_user(store: &Store, user: UserId) -> Vec<&Post> {
    store.posts.values().filter(|p| p.user_id == user).collect()
}

/// Comments where `author_id = user`
pub fn comments_by_author(store: &Store, user: UserId) -> Vec<&Comment> {
    store
        .comments
        .values()
        .filter(|c| c.author_id == user)
        .collect()
}

/// Comments where `post_id = post`
pub fn comments_on_post(store: &Store, post: PostId) -> Vec<&Comment> {
    store
        .comments
        .values()
        .filter(|c| c.post_id == post)
        .collect()
}

/// Media where `post_id = post`
pub fn media_for_post(store: &Store, post: PostId) -> Vec<&Media> {
    store.media.values().filter(|m| m.post_id == post).collect()
}

/// Edges where `followed_id = user`, ordered by follower id
pub fn followers_of(store: &Store, user: UserId) -> Vec<Follower> {
    store
        .follows
        .iter()
        .filter(|e| e.followed_id == user)
        .copied()
        .collect()
}

/// Edges where `follower_id = user`, ordered by followed id
pub fn following_of(store: &Store, user: UserId) -> Vec<Follower> {
    store
        .follows
        .iter()
        .filter(|e| e.follower_id == user)
        .copied()
        .collect()
}
