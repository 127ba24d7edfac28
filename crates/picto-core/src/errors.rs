use picto_core_types::{RequestContext, RequestId, TraceId};
use thiserror::Error;

use crate::model::{CommentId, Entity, MediaId, PostId, UserId};

/// Result type alias using PictoError
pub type Result<T> = std::result::Result<T, PictoError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that leaves the store, engine or CLI carries one of these
/// kinds. Each kind maps to a stable code callers can match on without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Malformed input that never reached a table (bad seed file, bad CLI value)
    InvalidInput,
    /// Lookup by key found no row
    NotFound,
    /// Uniqueness, column-limit or check constraint breached
    ConstraintViolation,
    /// Foreign key points to a row that does not exist
    ReferenceError,

    Io,
    Serialization,
    Persistence,
    Config,

    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::ReferenceError => "ERR_REFERENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification (`kind`) plus optional context: the operation that failed,
/// the entity and row involved, the offending field, and correlation ids.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<Entity>,
    entity_id: Option<String>,
    field: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            field: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Attach both correlation ids from a request context
    ///
    /// An op already recorded on the error is kept.
    pub fn with_context(mut self, ctx: &RequestContext) -> Self {
        self.request_id = Some(ctx.request_id.clone());
        self.trace_id = ctx.trace_id.clone();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity(&self) -> Option<Entity> {
        self.entity
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (id: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the in-memory table operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PictoError {
    // ===== Lookup misses =====
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: UserId },

    #[error("No user with username '{username}'")]
    UsernameNotFound { username: String },

    #[error("No user with email '{email}'")]
    EmailNotFound { email: String },

    #[error("Post not found: {post_id}")]
    PostNotFound { post_id: PostId },

    #[error("Comment not found: {comment_id}")]
    CommentNotFound { comment_id: CommentId },

    #[error("Media not found: {media_id}")]
    MediaNotFound { media_id: MediaId },

    #[error("User {follower_id} does not follow user {followed_id}")]
    FollowNotFound {
        follower_id: UserId,
        followed_id: UserId,
    },

    // ===== Uniqueness =====
    #[error("Username already taken: {username}")]
    UsernameTaken { username: String },

    #[error("Email already registered: {email}")]
    EmailTaken { email: String },

    #[error("User {follower_id} already follows user {followed_id}")]
    AlreadyFollowing {
        follower_id: UserId,
        followed_id: UserId,
    },

    // ===== Column / check constraints =====
    #[error("User {user_id} cannot follow themselves")]
    SelfFollow { user_id: UserId },

    #[error("{entity}.{field} is {actual} characters, limit is {max}")]
    FieldTooLong {
        entity: Entity,
        field: &'static str,
        max: usize,
        actual: usize,
    },

    // ===== References =====
    #[error("{entity}.{field} references missing {target} {target_id}")]
    DanglingReference {
        entity: Entity,
        field: &'static str,
        target: Entity,
        target_id: i64,
    },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<PictoError> for ExError {
    fn from(err: PictoError) -> Self {
        let message = err.to_string();
        let ex = match err {
            PictoError::UserNotFound { user_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity(Entity::User)
                .with_entity_id(user_id),
            PictoError::UsernameNotFound { .. } => ExError::new(ExErrorKind::NotFound)
                .with_entity(Entity::User)
                .with_field("username"),
            PictoError::EmailNotFound { .. } => ExError::new(ExErrorKind::NotFound)
                .with_entity(Entity::User)
                .with_field("email"),
            PictoError::PostNotFound { post_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity(Entity::Post)
                .with_entity_id(post_id),
            PictoError::CommentNotFound { comment_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity(Entity::Comment)
                .with_entity_id(comment_id),
            PictoError::MediaNotFound { media_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity(Entity::Media)
                .with_entity_id(media_id),
            PictoError::FollowNotFound {
                follower_id,
                followed_id,
            } => ExError::new(ExErrorKind::NotFound)
                .with_entity(Entity::Follower)
                .with_entity_id(format!("{}->{}", follower_id, followed_id)),

            PictoError::UsernameTaken { .. } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity(Entity::User)
                .with_field("username"),
            PictoError::EmailTaken { .. } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity(Entity::User)
                .with_field("email"),
            PictoError::AlreadyFollowing {
                follower_id,
                followed_id,
            } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity(Entity::Follower)
                .with_entity_id(format!("{}->{}", follower_id, followed_id)),
            PictoError::SelfFollow { user_id } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity(Entity::Follower)
                .with_entity_id(user_id),
            PictoError::FieldTooLong { entity, field, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity(entity)
                    .with_field(field)
            }

            PictoError::DanglingReference {
                entity,
                field,
                target_id,
                ..
            } => ExError::new(ExErrorKind::ReferenceError)
                .with_entity(entity)
                .with_field(field)
                .with_entity_id(target_id),

            PictoError::InvalidInput { .. } => ExError::new(ExErrorKind::InvalidInput),
        };
        ex.with_message(message)
    }
}
