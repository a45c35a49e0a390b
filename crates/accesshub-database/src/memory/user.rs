//! In-memory user store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use accesshub_core::error::AppError;
use accesshub_core::result::AppResult;
use accesshub_entity::status::RecordStatus;
use accesshub_entity::user::{NewUser, User};

use crate::store::UserStore;

/// User store holding all records in a `HashMap` behind an `RwLock`.
///
/// Enforces global email uniqueness (case-insensitive) the same way the
/// database unique index does.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    records: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err() -> AppError {
        AppError::internal("User store lock poisoned")
    }

    fn email_taken(records: &HashMap<Uuid, User>, email: &str, exclude: Option<Uuid>) -> bool {
        let wanted = email.to_lowercase();
        records
            .values()
            .any(|u| u.email.to_lowercase() == wanted && Some(u.id) != exclude)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        Ok(records.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let wanted = email.to_lowercase();
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        Ok(records
            .values()
            .find(|u| u.email.to_lowercase() == wanted)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<User>> {
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        Ok(ids.iter().filter_map(|id| records.get(id).cloned()).collect())
    }

    async fn list(&self, search: Option<&str>) -> AppResult<Vec<User>> {
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        let prefix = search.map(str::to_lowercase);

        let mut users: Vec<User> = records
            .values()
            .filter(|u| !u.status.is_deleted())
            .filter(|u| match prefix.as_deref() {
                Some(p) if !p.is_empty() => {
                    u.first_name.to_lowercase().starts_with(p)
                        || u.last_name.to_lowercase().starts_with(p)
                        || u.email.to_lowercase().starts_with(p)
                }
                _ => true,
            })
            .cloned()
            .collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        let mut records = self.records.write().map_err(|_| Self::lock_err())?;
        if Self::email_taken(&records, &data.email, None) {
            return Err(AppError::conflict("Email already exists"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role_id: data.role_id,
            is_active: true,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        };
        records.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let mut records = self.records.write().map_err(|_| Self::lock_err())?;
        if !records.contains_key(&user.id) {
            return Err(AppError::not_found(format!("User {} not found", user.id)));
        }
        if Self::email_taken(&records, &user.email, Some(user.id)) {
            return Err(AppError::conflict("Email already exists"));
        }
        records.insert(user.id, user.clone());
        Ok(user.clone())
    }
}
