use picto_core::model::{NewPost, NewUser, PostId, UserId};
use picto_core::ops::{post_ops, user_ops};
use picto_core::Store;

/// Insert a user whose email is derived from the username
#[allow(dead_code)]
pub fn add_user(store: &mut Store, username: &str) -> UserId {
    user_ops::create_user(
        store,
        NewUser::new(username, format!("{}@x.com", username), "pw"),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn add_post(store: &mut Store, owner: UserId, caption: &str) -> PostId {
    post_ops::create_post(store, NewPost::new(owner).with_caption(caption)).unwrap()
}
