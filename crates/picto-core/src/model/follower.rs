use serde::{Deserialize, Serialize};
use serde_json::json;

use super::record::{record, Record, ToRecord};
use super::UserId;

/// A follow edge: `follower_id` follows `followed_id`
///
/// The pair is the whole row and its composite key. Ordering is by
/// `(follower_id, followed_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Follower {
    pub follower_id: UserId,
    pub followed_id: UserId,
}

impl Follower {
    pub fn new(follower_id: UserId, followed_id: UserId) -> Self {
        Self {
            follower_id,
            followed_id,
        }
    }

    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.followed_id
    }

    pub fn involves(&self, user_id: UserId) -> bool {
        self.follower_id == user_id || self.followed_id == user_id
    }
}

impl ToRecord for Follower {
    const FIELDS: &'static [&'static str] = &["follower_id", "followed_id"];

    fn to_record(&self) -> Record {
        record([
            ("follower_id", json!(self.follower_id)),
            ("followed_id", json!(self.followed_id)),
        ])
    }
}
