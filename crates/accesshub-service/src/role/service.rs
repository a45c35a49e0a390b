//! Role lifecycle — creation, module-set edits, update, soft delete.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use accesshub_core::error::AppError;
use accesshub_core::result::AppResult;
use accesshub_database::store::RoleStore;
use accesshub_entity::role::{NewRole, Role, RoleChanges};
use accesshub_entity::status::RecordStatus;

/// Handles role lifecycle operations.
#[derive(Clone)]
pub struct RoleService {
    /// Role store.
    roles: Arc<dyn RoleStore>,
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// Creates a new role.
    ///
    /// Fails when the name is empty, the module list contains duplicates,
    /// or a non-deleted role with the same name already exists. The
    /// name-uniqueness check is check-then-write; the store serializes
    /// conflicting writes.
    pub async fn create(&self, data: NewRole) -> AppResult<Role> {
        let role_name = data.role_name.trim().to_string();
        if role_name.is_empty() {
            return Err(AppError::validation("Role name is required"));
        }

        reject_duplicate_entries(&data.access_modules)?;

        if self.roles.find_by_name(&role_name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Role name '{role_name}' already exists"
            )));
        }

        let role = self
            .roles
            .create(&NewRole {
                role_name,
                access_modules: data.access_modules,
            })
            .await?;

        info!(role_id = %role.id, role_name = %role.role_name, "Role created");
        Ok(role)
    }

    /// Lists all non-deleted roles.
    pub async fn list(&self) -> AppResult<Vec<Role>> {
        self.roles.list().await
    }

    /// Fetches a role by id. Soft-deleted roles still resolve here.
    pub async fn get(&self, id: Uuid) -> AppResult<Role> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Role not found"))
    }

    /// Applies a partial update. A new name must not collide with another
    /// non-deleted role's name.
    pub async fn update(&self, id: Uuid, changes: RoleChanges) -> AppResult<Role> {
        let mut role = self.get(id).await?;

        if let Some(role_name) = changes.role_name {
            let role_name = role_name.trim().to_string();
            if role_name.is_empty() {
                return Err(AppError::validation("Role name is required"));
            }
            if let Some(other) = self.roles.find_by_name(&role_name).await?
                && other.id != id
            {
                return Err(AppError::conflict(format!(
                    "Role name '{role_name}' already exists"
                )));
            }
            role.role_name = role_name;
        }

        if let Some(access_modules) = changes.access_modules {
            reject_duplicate_entries(&access_modules)?;
            role.access_modules = access_modules;
        }

        if let Some(is_active) = changes.is_active {
            role.is_active = is_active;
        }

        role.updated_at = Utc::now();
        let role = self.roles.update(&role).await?;

        info!(role_id = %role.id, "Role updated");
        Ok(role)
    }

    /// Adds modules to a role's grant set, all-or-nothing.
    ///
    /// If any requested module is already present (compared verbatim) the
    /// entire batch is rejected, listing the offending duplicates; nothing
    /// is added.
    pub async fn add_modules(&self, id: Uuid, new_modules: Vec<String>) -> AppResult<Role> {
        if new_modules.is_empty() {
            return Err(AppError::validation("Access module list is required"));
        }

        let mut role = self.get(id).await?;

        let new_modules = dedupe_preserving_order(new_modules);
        let duplicates = role.existing_modules(&new_modules);
        if !duplicates.is_empty() {
            return Err(AppError::validation(format!(
                "Modules already exist: {}",
                duplicates.join(", ")
            )));
        }

        role.access_modules.extend(new_modules);
        role.updated_at = Utc::now();
        let role = self.roles.update(&role).await?;

        info!(role_id = %role.id, "Access modules added");
        Ok(role)
    }

    /// Removes modules from a role's grant set.
    ///
    /// Errors only when none of the requested modules are present;
    /// otherwise removes the intersection and silently ignores entries that
    /// were absent.
    pub async fn remove_modules(&self, id: Uuid, modules: Vec<String>) -> AppResult<Role> {
        if modules.is_empty() {
            return Err(AppError::validation("Access module list is required"));
        }

        let mut role = self.get(id).await?;

        let present = role.existing_modules(&modules);
        if present.is_empty() {
            return Err(AppError::validation(format!(
                "None of the provided modules exist in the role: {}",
                modules.join(", ")
            )));
        }

        role.access_modules.retain(|m| !modules.contains(m));
        role.updated_at = Utc::now();
        let role = self.roles.update(&role).await?;

        info!(role_id = %role.id, "Access modules removed");
        Ok(role)
    }

    /// Soft-deletes a role. The record stays addressable by id.
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let mut role = self.get(id).await?;
        role.status = RecordStatus::Deleted;
        role.updated_at = Utc::now();
        self.roles.update(&role).await?;

        info!(role_id = %id, "Role soft-deleted");
        Ok(())
    }
}

/// Rejects a module list containing the same entry twice (verbatim).
fn reject_duplicate_entries(modules: &[String]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for module in modules {
        if !seen.insert(module.as_str()) {
            return Err(AppError::validation(format!(
                "Duplicate access module in request: {module}"
            )));
        }
    }
    Ok(())
}

fn dedupe_preserving_order(modules: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    modules
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}
