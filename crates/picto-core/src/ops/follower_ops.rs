use crate::errors::{PictoError, Result};
use crate::model::{Entity, Follower};
use crate::rules::validation::validate_follow;

use super::store::Store;
use super::user_ops::require_user;

/// Record that `edge.follower_id` follows `edge.followed_id`
///
/// # Errors
/// * `SelfFollow` - If both ids are the same user
/// * `DanglingReference` - If either user does not exist
/// * `AlreadyFollowing` - If the edge already exists
pub fn follow(store: &mut Store, edge: Follower) -> Result<()> {
    check_edge(store, &edge)?;
    store.follows.insert(edge);
    Ok(())
}

/// # Errors
/// * `FollowNotFound` - If the edge does not exist
pub fn read_follow(store: &Store, edge: Follower) -> Result<Follower> {
    if store.contains_follow(&edge) {
        Ok(edge)
    } else {
        Err(not_found(&edge))
    }
}

/// Re-key a follow edge
///
/// Both columns form the key, so an update replaces the old pair with the
/// new one. Either both happen or neither does.
///
/// # Errors
/// * `FollowNotFound` - If `old` does not exist
/// * any error `follow` would raise for `new`
pub fn update_follow(store: &mut Store, old: Follower, new: Follower) -> Result<()> {
    if !store.contains_follow(&old) {
        return Err(not_found(&old));
    }
    if old == new {
        return Ok(());
    }
    check_edge(store, &new)?;

    store.follows.remove(&old);
    store.follows.insert(new);
    Ok(())
}

/// # Errors
/// * `FollowNotFound` - If the edge does not exist
pub fn unfollow(store: &mut Store, edge: Follower) -> Result<()> {
    if !store.follows.remove(&edge) {
        return Err(not_found(&edge));
    }
    Ok(())
}

fn check_edge(store: &Store, edge: &Follower) -> Result<()> {
    validate_follow(edge)?;
    require_user(store, edge.follower_id, Entity::Follower, "follower_id")?;
    require_user(store, edge.followed_id, Entity::Follower, "followed_id")?;
    if store.contains_follow(edge) {
        return Err(PictoError::AlreadyFollowing {
            follower_id: edge.follower_id,
            followed_id: edge.followed_id,
        });
    }
    Ok(())
}

fn not_found(edge: &Follower) -> PictoError {
    PictoError::FollowNotFound {
        follower_id: edge.follower_id,
        followed_id: edge.followed_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewUser;
    use crate::ops::user_ops::create_user;

    fn two_users() -> Store {
        let mut store = Store::new();
        create_user(&mut store, NewUser::new("alice", "a@x.com", "h1")).unwrap();
        create_user(&mut store, NewUser::new("bob", "b@x.com", "h2")).unwrap();
        store
    }

    #[test]
    fn test_rekey_moves_edge() {
        let mut store = two_users();
        follow(&mut store, Follower::new(1, 2)).unwrap();

        update_follow(&mut store, Follower::new(1, 2), Follower::new(2, 1)).unwrap();

        assert!(read_follow(&store, Follower::new(1, 2)).is_err());
        assert!(read_follow(&store, Follower::new(2, 1)).is_ok());
    }

    #[test]
    fn test_rekey_onto_existing_edge_keeps_both() {
        let mut store = two_users();
        follow(&mut store, Follower::new(1, 2)).unwrap();
        follow(&mut store, Follower::new(2, 1)).unwrap();

        let err = update_follow(&mut store, Follower::new(1, 2), Follower::new(2, 1)).unwrap_err();

        assert!(matches!(err, PictoError::AlreadyFollowing { .. }));
        assert_eq!(store.count(Entity::Follower), 2);
    }

    #[test]
    fn test_unfollow_missing_edge() {
        let mut store = two_users();
        assert_eq!(
            unfollow(&mut store, Follower::new(1, 2)),
            Err(PictoError::FollowNotFound {
                follower_id: 1,
                followed_id: 2
            })
        );
    }
}
