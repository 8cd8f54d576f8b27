//! User domain entity and related types.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User record as held by the store.
///
/// `id` is chosen by the caller; nothing enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Caller-supplied identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// Contact e-mail address
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

impl User {
    /// Create a user with both text fields set
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Replace the display name.
    ///
    /// Editing a user propagates this field only; `email` keeps its value.
    pub fn rename(&mut self, name: Option<String>) {
        self.name = name;
    }
}

impl From<UserForm> for User {
    fn from(form: UserForm) -> Self {
        Self {
            id: form.id,
            name: form.name,
            email: form.email,
        }
    }
}

/// Candidate user bound from a submitted create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserForm {
    /// Identifier (0 when the form leaves it out)
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    /// Display name (required)
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Name is required"))]
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// Contact e-mail address
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

/// Bind empty inputs to `None`, as browsers submit untouched fields as `""`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
