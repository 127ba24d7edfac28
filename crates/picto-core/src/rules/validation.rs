//! Column rules
//!
//! Length limits and nullability per column. The same numbers appear as
//! `CHECK (length(..) <= N)` clauses in the SQL schema; these checks run
//! first so callers get a precise `FieldTooLong` instead of a bare SQLite
//! check failure.

use crate::errors::{PictoError, Result};
use crate::model::{
    CommentPatch, Entity, Follower, MediaPatch, NewComment, NewMedia, NewPost, NewUser, PostPatch,
    UserPatch,
};

pub const USERNAME_MAX: usize = 50;
pub const PERSON_NAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 120;
pub const PASSWORD_MAX: usize = 120;
pub const POST_IMAGE_MAX: usize = 120;
pub const POST_CAPTION_MAX: usize = 120;
pub const COMMENT_TEXT_MAX: usize = 250;
pub const MEDIA_TYPE_MAX: usize = 50;
pub const MEDIA_URL_MAX: usize = 120;

/// One bounded text column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRule {
    pub entity: Entity,
    pub column: &'static str,
    pub max_len: usize,
    pub nullable: bool,
}

pub const COLUMN_RULES: &[ColumnRule] = &[
    rule(Entity::User, "username", USERNAME_MAX, false),
    rule(Entity::User, "firstname", PERSON_NAME_MAX, true),
    rule(Entity::User, "lastname", PERSON_NAME_MAX, true),
    rule(Entity::User, "email", EMAIL_MAX, false),
    rule(Entity::User, "password", PASSWORD_MAX, false),
    rule(Entity::Post, "image", POST_IMAGE_MAX, true),
    rule(Entity::Post, "caption", POST_CAPTION_MAX, true),
    rule(Entity::Comment, "comment_text", COMMENT_TEXT_MAX, false),
    rule(Entity::Media, "type", MEDIA_TYPE_MAX, false),
    rule(Entity::Media, "url", MEDIA_URL_MAX, false),
];

const fn rule(entity: Entity, column: &'static str, max_len: usize, nullable: bool) -> ColumnRule {
    ColumnRule {
        entity,
        column,
        max_len,
        nullable,
    }
}

/// Length in characters, matching SQLite's `length()` on TEXT
fn check_len(entity: Entity, field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(PictoError::FieldTooLong {
            entity,
            field,
            max,
            actual,
        });
    }
    Ok(())
}

fn check_opt_len(
    entity: Entity,
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<()> {
    match value {
        Some(v) => check_len(entity, field, v, max),
        None => Ok(()),
    }
}

pub fn validate_new_user(user: &NewUser) -> Result<()> {
    check_len(Entity::User, "username", &user.username, USERNAME_MAX)?;
    check_opt_len(Entity::User, "firstname", user.firstname.as_deref(), PERSON_NAME_MAX)?;
    check_opt_len(Entity::User, "lastname", user.lastname.as_deref(), PERSON_NAME_MAX)?;
    check_len(Entity::User, "email", &user.email, EMAIL_MAX)?;
    check_len(Entity::User, "password", user.password.expose(), PASSWORD_MAX)
}

pub fn validate_user_patch(patch: &UserPatch) -> Result<()> {
    check_opt_len(Entity::User, "username", patch.username.as_deref(), USERNAME_MAX)?;
    check_opt_len(
        Entity::User,
        "firstname",
        patch.firstname.as_ref().and_then(Option::as_deref),
        PERSON_NAME_MAX,
    )?;
    check_opt_len(
        Entity::User,
        "lastname",
        patch.lastname.as_ref().and_then(Option::as_deref),
        PERSON_NAME_MAX,
    )?;
    check_opt_len(Entity::User, "email", patch.email.as_deref(), EMAIL_MAX)?;
    check_opt_len(
        Entity::User,
        "password",
        patch.password.as_ref().map(|p| p.expose().as_str()),
        PASSWORD_MAX,
    )
}

pub fn validate_new_post(post: &NewPost) -> Result<()> {
    check_opt_len(Entity::Post, "image", post.image.as_deref(), POST_IMAGE_MAX)?;
    check_opt_len(Entity::Post, "caption", post.caption.as_deref(), POST_CAPTION_MAX)
}

pub fn validate_post_patch(patch: &PostPatch) -> Result<()> {
    check_opt_len(
        Entity::Post,
        "image",
        patch.image.as_ref().and_then(Option::as_deref),
        POST_IMAGE_MAX,
    )?;
    check_opt_len(
        Entity::Post,
        "caption",
        patch.caption.as_ref().and_then(Option::as_deref),
        POST_CAPTION_MAX,
    )
}

pub fn validate_new_comment(comment: &NewComment) -> Result<()> {
    check_len(Entity::Comment, "comment_text", &comment.comment_text, COMMENT_TEXT_MAX)
}

pub fn validate_comment_patch(patch: &CommentPatch) -> Result<()> {
    check_opt_len(
        Entity::Comment,
        "comment_text",
        patch.comment_text.as_deref(),
        COMMENT_TEXT_MAX,
    )
}

pub fn validate_new_media(media: &NewMedia) -> Result<()> {
    check_len(Entity::Media, "type", &media.media_type, MEDIA_TYPE_MAX)?;
    check_len(Entity::Media, "url", &media.url, MEDIA_URL_MAX)
}

pub fn validate_media_patch(patch: &MediaPatch) -> Result<()> {
    check_opt_len(Entity::Media, "type", patch.media_type.as_deref(), MEDIA_TYPE_MAX)?;
    check_opt_len(Entity::Media, "url", patch.url.as_deref(), MEDIA_URL_MAX)
}

/// A user may not follow themselves
pub fn validate_follow(edge: &Follower) -> Result<()> {
    if edge.is_self_follow() {
        return Err(PictoError::SelfFollow {
            user_id: edge.follower_id,
        });
    }
    Ok(())
}
