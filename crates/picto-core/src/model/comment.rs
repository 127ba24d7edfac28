use serde::Serialize;
use serde_json::json;

use super::record::{record, Record, ToRecord};
use super::{CommentId, PostId, UserId};

/// A comment written by a User on a Post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub comment_text: String,
    pub author_id: UserId,
    pub post_id: PostId,
}

impl Comment {
    pub fn from_new(id: CommentId, new: NewComment) -> Self {
        Self {
            id,
            comment_text: new.comment_text,
            author_id: new.author_id,
            post_id: new.post_id,
        }
    }
}

impl ToRecord for Comment {
    const FIELDS: &'static [&'static str] = &["id", "comment_text", "author_id", "post_id"];

    fn to_record(&self) -> Record {
        record([
            ("id", json!(self.id)),
            ("comment_text", json!(self.comment_text)),
            ("author_id", json!(self.author_id)),
            ("post_id", json!(self.post_id)),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub comment_text: String,
    pub author_id: UserId,
    pub post_id: PostId,
}

impl NewComment {
    pub fn new(author_id: UserId, post_id: PostId, comment_text: impl Into<String>) -> Self {
        Self {
            comment_text: comment_text.into(),
            author_id,
            post_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub comment_text: Option<String>,
    pub author_id: Option<UserId>,
    pub post_id: Option<PostId>,
}

impl CommentPatch {
    pub fn is_empty(&self) -> bool {
        self.comment_text.is_none() && self.author_id.is_none() && self.post_id.is_none()
    }

    pub fn apply(self, comment: &mut Comment) {
        if let Some(text) = self.comment_text {
            comment.comment_text = text;
        }
        if let Some(author_id) = self.author_id {
            comment.author_id = author_id;
        }
        if let Some(post_id) = self.post_id {
            comment.post_id = post_id;
        }
    }
}
