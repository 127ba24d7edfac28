use serde::Serialize;
use serde_json::json;

use super::record::{record, Record, ToRecord};
use super::{PostId, UserId};

/// A post owned by one User
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub image: Option<String>,
    pub caption: Option<String>,
}

impl Post {
    pub fn from_new(id: PostId, new: NewPost) -> Self {
        Self {
            id,
            user_id: new.user_id,
            image: new.image,
            caption: new.caption,
        }
    }
}

impl ToRecord for Post {
    const FIELDS: &'static [&'static str] = &["id", "user_id", "image", "caption"];

    fn to_record(&self) -> Record {
        record([
            ("id", json!(self.id)),
            ("user_id", json!(self.user_id)),
            ("image", json!(self.image)),
            ("caption", json!(self.caption)),
        ])
    }
}

/// Insert payload for a Post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: UserId,
    pub image: Option<String>,
    pub caption: Option<String>,
}

impl NewPost {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            image: None,
            caption: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Partial update for a Post; `Some(None)` clears image or caption
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub user_id: Option<UserId>,
    pub image: Option<Option<String>>,
    pub caption: Option<Option<String>>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.image.is_none() && self.caption.is_none()
    }

    pub fn apply(self, post: &mut Post) {
        if let Some(user_id) = self.user_id {
            post.user_id = user_id;
        }
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(caption) = self.caption {
            post.caption = caption;
        }
    }
}
