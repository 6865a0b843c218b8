//! User account model and DTOs.
//!
//! The `User` row carries the stored credential and therefore never derives
//! `Serialize`; everything that leaves the API goes through [`SafeUser`].

use motordesk_core::types::Id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::enums::UserRole;

/// A row from the `users` table. Not serializable by design.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub password: String,
    pub display_name: Option<String>,
    pub role: UserRole,
}

/// Credential-redacted view of a user, safe to return to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeUser {
    pub id: Id,
    pub username: String,
    pub display_name: Option<String>,
    pub role: UserRole,
}

impl From<User> for SafeUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            role: user.role,
        }
    }
}

/// DTO for creating a user.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    pub display_name: Option<String>,
    pub role: Option<UserRole>,
}

/// DTO for updating a user. Deliberately has no password field: credential
/// changes do not go through the generic profile update path, and any
/// `password` key in the body is dropped at deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<UserRole>,
}
