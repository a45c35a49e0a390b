//! In-memory role store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use accesshub_core::error::AppError;
use accesshub_core::result::AppResult;
use accesshub_entity::role::{NewRole, Role};
use accesshub_entity::status::RecordStatus;

use crate::store::RoleStore;

/// Role store holding all records in a `HashMap` behind an `RwLock`.
///
/// The lock is never held across an await point; writes are serialized
/// through it, matching the serialization the database provides.
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    records: RwLock<HashMap<Uuid, Role>>,
}

impl MemoryRoleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err() -> AppError {
        AppError::internal("Role store lock poisoned")
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        Ok(records.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        Ok(records
            .values()
            .find(|r| r.role_name == name && !r.status.is_deleted())
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        let mut roles: Vec<Role> = records
            .values()
            .filter(|r| !r.status.is_deleted())
            .cloned()
            .collect();
        roles.sort_by_key(|r| r.created_at);
        Ok(roles)
    }

    async fn create(&self, data: &NewRole) -> AppResult<Role> {
        let now = Utc::now();
        let role = Role {
            id: Uuid::new_v4(),
            role_name: data.role_name.clone(),
            access_modules: data.access_modules.clone(),
            is_active: true,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.records.write().map_err(|_| Self::lock_err())?;
        records.insert(role.id, role.clone());
        Ok(role)
    }

    async fn update(&self, role: &Role) -> AppResult<Role> {
        let mut records = self.records.write().map_err(|_| Self::lock_err())?;
        if !records.contains_key(&role.id) {
            return Err(AppError::not_found(format!("Role {} not found", role.id)));
        }
        records.insert(role.id, role.clone());
        Ok(role.clone())
    }
}
