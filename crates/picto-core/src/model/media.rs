use serde::Serialize;
use serde_json::json;

use super::record::{record, Record, ToRecord};
use super::{MediaId, PostId};

/// A media attachment ("image", "video", ...) on a Post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub id: MediaId,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub post_id: PostId,
}

impl Media {
    pub fn from_new(id: MediaId, new: NewMedia) -> Self {
        Self {
            id,
            media_type: new.media_type,
            url: new.url,
            post_id: new.post_id,
        }
    }
}

impl ToRecord for Media {
    const FIELDS: &'static [&'static str] = &["id", "type", "url", "post_id"];

    fn to_record(&self) -> Record {
        record([
            ("id", json!(self.id)),
            ("type", json!(self.media_type)),
            ("url", json!(self.url)),
            ("post_id", json!(self.post_id)),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedia {
    pub media_type: String,
    pub url: String,
    pub post_id: PostId,
}

impl NewMedia {
    pub fn new(post_id: PostId, media_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            url: url.into(),
            post_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPatch {
    pub media_type: Option<String>,
    pub url: Option<String>,
    pub post_id: Option<PostId>,
}

impl MediaPatch {
    pub fn is_empty(&self) -> bool {
        self.media_type.is_none() && self.url.is_none() && self.post_id.is_none()
    }

    pub fn apply(self, media: &mut Media) {
        if let Some(media_type) = self.media_type {
            media.media_type = media_type;
        }
        if let Some(url) = self.url {
            media.url = url;
        }
        if let Some(post_id) = self.post_id {
            media.post_id = post_id;
        }
    }
}
