//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::super::status::RecordStatus;

/// A named permission set in the RBAC system.
///
/// Permissions are expressed as access modules: plain module names a role
/// grants to its users. The list is stored in insertion order and compared
/// case-insensitively only at access-check time, never at rest.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Human-readable label, unique among non-deleted roles.
    pub role_name: String,
    /// Access modules granted by this role.
    pub access_modules: Vec<String>,
    /// Business-level active flag. An inactive role denies all access checks.
    pub is_active: bool,
    /// Soft-delete status.
    pub status: RecordStatus,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Check whether the role grants the given module, ignoring case.
    pub fn grants_module(&self, module: &str) -> bool {
        let wanted = module.to_lowercase();
        self.access_modules
            .iter()
            .any(|m| m.to_lowercase() == wanted)
    }

    /// Return the subset of `modules` already present, compared verbatim.
    ///
    /// Duplicate detection at write time is deliberately case-sensitive:
    /// module names are not normalized at rest.
    pub fn existing_modules<'a>(&self, modules: &'a [String]) -> Vec<&'a str> {
        modules
            .iter()
            .filter(|m| self.access_modules.contains(m))
            .map(String::as_str)
            .collect()
    }
}

/// Data required to create a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRole {
    /// Role label.
    pub role_name: String,
    /// Initial access module list.
    pub access_modules: Vec<String>,
}

/// Partial update to an existing role. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleChanges {
    /// New role label.
    pub role_name: Option<String>,
    /// Replacement access module list.
    pub access_modules: Option<Vec<String>>,
    /// New active flag.
    pub is_active: Option<bool>,
}
