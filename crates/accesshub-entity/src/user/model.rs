//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::super::status::RecordStatus;

/// A registered user in the AccessHub system.
///
/// Every user references exactly one role; no default role is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, unique across all users including soft-deleted ones.
    pub email: String,
    /// Argon2 password hash. Never the raw password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The role this user belongs to. Not validated to point at a live role.
    pub role_id: Uuid,
    /// Business-level active flag. Login is refused when false.
    pub is_active: bool,
    /// Soft-delete status.
    pub status: RecordStatus,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user can log in right now.
    pub fn can_login(&self) -> bool {
        self.is_active && !self.status.is_deleted()
    }
}

/// Data required to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role_id: Uuid,
}

/// Partial update to an existing user. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserChanges {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New role reference.
    pub role_id: Option<Uuid>,
    /// New active flag.
    pub is_active: Option<bool>,
}
