use picto_core_types::Sensitive;
use serde::Serialize;
use serde_json::json;

use super::record::{record, Record, ToRecord};
use super::UserId;

/// A registered account
///
/// `password` is stored exactly as provided (hashing belongs to the caller)
/// and is excluded from both `Serialize` and `to_record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Sensitive<String>,
}

impl User {
    /// Materialize a row from its insert payload and the id the store assigned
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            firstname: new.firstname,
            lastname: new.lastname,
            email: new.email,
            password: new.password,
        }
    }
}

impl ToRecord for User {
    const FIELDS: &'static [&'static str] = &["id", "username", "firstname", "lastname", "email"];

    fn to_record(&self) -> Record {
        record([
            ("id", json!(self.id)),
            ("username", json!(self.username)),
            ("firstname", json!(self.firstname)),
            ("lastname", json!(self.lastname)),
            ("email", json!(self.email)),
        ])
    }
}

/// Insert payload for a User
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: String,
    pub password: Sensitive<String>,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            firstname: None,
            lastname: None,
            email: email.into(),
            password: Sensitive::new(password.into()),
        }
    }

    pub fn with_firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    pub fn with_lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }
}

/// Partial update for a User
///
/// `None` leaves a field untouched. For nullable columns `Some(None)` clears
/// the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub firstname: Option<Option<String>>,
    pub lastname: Option<Option<String>>,
    pub email: Option<String>,
    pub password: Option<Sensitive<String>>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.email.is_none()
            && self.password.is_none()
    }

    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(firstname) = self.firstname {
            user.firstname = firstname;
        }
        if let Some(lastname) = self.lastname {
            user.lastname = lastname;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}
