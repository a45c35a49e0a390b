//! Response DTOs.
//!
//! Everything rides in the `{status, message, data}` envelope the existing
//! clients expect, with camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use accesshub_entity::role::Role;
use accesshub_entity::user::User;
use accesshub_service::user::{LoginOutcome, UserWithRole};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true` for successes.
    pub status: bool,
    /// Human-readable message.
    pub message: String,
    /// Response payload, omitted for message-only responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response carrying data.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Creates a successful message-only response.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
        }
    }
}

/// Role representation for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    /// Role id.
    pub id: Uuid,
    /// Role name.
    pub role_name: String,
    /// Granted modules.
    pub access_module: Vec<String>,
    /// Active flag.
    pub is_active: bool,
    /// Soft-deletion flag.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            role_name: role.role_name,
            access_module: role.access_modules,
            is_active: role.is_active,
            is_deleted: role.status.is_deleted(),
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

/// Role reference embedded in user responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    /// Role id.
    pub id: Uuid,
    /// Role name.
    pub role_name: String,
    /// Granted modules.
    pub access_module: Vec<String>,
}

impl From<Role> for RoleSummary {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            role_name: role.role_name,
            access_module: role.access_modules,
        }
    }
}

/// User representation for responses. The password hash never leaves the
/// entity layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Role id.
    pub role_id: Uuid,
    /// Resolved role, when the reference is live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleSummary>,
    /// Active flag.
    pub is_active: bool,
    /// Soft-deletion flag.
    pub is_deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role_id: user.role_id,
            role: None,
            is_active: user.is_active,
            is_deleted: user.status.is_deleted(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserWithRole> for UserResponse {
    fn from(entry: UserWithRole) -> Self {
        let mut response = Self::from(entry.user);
        response.role = entry.role.map(RoleSummary::from);
        response
    }
}

/// Login response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed bearer token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user, trimmed down.
    pub user: LoginUser,
}

/// User summary embedded in the login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    /// User id.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Role name, when the role reference is live.
    pub role: Option<String>,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            token: outcome.token.token,
            expires_at: outcome.token.expires_at,
            user: LoginUser {
                id: outcome.user.id,
                first_name: outcome.user.first_name,
                last_name: outcome.user.last_name,
                email: outcome.user.email,
                role: outcome.role_name,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string, always `"ok"` when reachable.
    pub status: String,
    /// Crate version.
    pub version: String,
}
