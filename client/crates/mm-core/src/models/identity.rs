//! The authenticated user as held by the client after login.

use crate::models::gender;
use crate::{CoreError, CoreErrorResult, Gender, Role, UserId};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields that must never be held or persisted client-side.
pub const SECRET_FIELDS: &[&str] = &["password"];

/// Identity of the user operating this client.
///
/// Fields the client does not interpret (address, age, image, ...) are kept in
/// `extra` so they survive a persist/restore cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    #[serde(
        default,
        deserialize_with = "gender::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(id: impl Into<UserId>, username: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role,
            gender: None,
            fullname: None,
            extra: Map::new(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Builds an identity from the `data` object of a login response.
    ///
    /// Secret fields are dropped before the payload is typed, so the returned
    /// value is safe to hand to the session store.
    pub fn from_login_data(data: Value) -> CoreErrorResult<Self> {
        let mut object = match data {
            Value::Object(object) => object,
            Value::Null => return Err(CoreError::validation("No user data provided for login")),
            other => {
                return Err(CoreError::validation(format!(
                    "Expected a user object, got {other}"
                )));
            }
        };

        for field in SECRET_FIELDS {
            object.remove(*field);
        }

        if object.is_empty() {
            return Err(CoreError::validation("No user data provided for login"));
        }

        let identity: Identity = serde_json::from_value(Value::Object(object))?;
        if identity.is_empty() {
            return Err(CoreError::validation("User data is missing an id or username"));
        }

        Ok(identity)
    }

    /// An identity without an id or username identifies nobody.
    pub fn is_empty(&self) -> bool {
        self.id.is_blank() || self.username.trim().is_empty()
    }

    /// Removes secret fields that slipped into `extra`. Returns true if any were found.
    pub fn strip_secrets(&mut self) -> bool {
        let mut stripped = false;
        for field in SECRET_FIELDS {
            stripped |= self.extra.remove(*field).is_some();
        }
        stripped
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.fullname
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}
