//! Request DTOs with validation.
//!
//! Field names follow the wire convention of the existing clients, so
//! everything is camelCase on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use accesshub_service::user::UserFieldUpdate;

/// Create role request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    /// Role name.
    #[validate(length(min = 1, message = "Role name is required"))]
    pub role_name: String,
    /// Granted access modules.
    #[serde(default)]
    pub access_module: Vec<String>,
}

/// Update role request body. All fields optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    /// New role name.
    pub role_name: Option<String>,
    /// Replacement module list.
    pub access_module: Option<Vec<String>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Module grant request body for `PATCH /addModules/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddModulesRequest {
    /// Modules to append to the role's grant list.
    #[serde(default)]
    pub new_modules: Vec<String>,
}

/// Module revocation request body for `DELETE /removeModules/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveModulesRequest {
    /// Modules to drop from the role's grant list.
    #[serde(default)]
    pub modules_to_remove: Vec<String>,
}

/// Register user request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Given name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Raw password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Assigned role.
    pub role_id: Uuid,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User listing request body with an optional prefix search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchUsersRequest {
    /// Case-insensitive prefix matched against first name, last name, and
    /// email.
    pub search: Option<String>,
}

/// Update user request body. All fields optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
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

/// Access check request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCheckRequest {
    /// Module the caller wants to reach.
    pub access_to_module: Option<String>,
}

/// Bulk name-change request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManyRequest {
    /// Target user ids.
    #[serde(default)]
    pub ids: Vec<Uuid>,
    /// New given name, exclusive with `last_name`.
    pub first_name: Option<String>,
    /// New family name, exclusive with `first_name`.
    pub last_name: Option<String>,
}

/// Per-user bulk update request body.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMultipleRequest {
    /// One entry per target user.
    #[serde(default)]
    pub users: Vec<UserFieldUpdate>,
}
