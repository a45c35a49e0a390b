//! Role repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use accesshub_core::error::{AppError, ErrorKind};
use accesshub_core::result::AppResult;
use accesshub_entity::role::{NewRole, Role};

use crate::store::RoleStore;

/// PostgreSQL-backed repository for role records.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for RoleRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find role by id", e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>(
            "SELECT * FROM roles WHERE role_name = $1 AND status <> 'deleted'",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find role by name", e))
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>(
            "SELECT * FROM roles WHERE status <> 'deleted' ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roles", e))
    }

    async fn create(&self, data: &NewRole) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "INSERT INTO roles (role_name, access_modules) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.role_name)
        .bind(&data.access_modules)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create role", e))
    }

    async fn update(&self, role: &Role) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "UPDATE roles SET role_name = $2, access_modules = $3, is_active = $4, \
                              status = $5, updated_at = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(role.id)
        .bind(&role.role_name)
        .bind(&role.access_modules)
        .bind(role.is_active)
        .bind(role.status)
        .bind(role.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update role", e))?
        .ok_or_else(|| AppError::not_found(format!("Role {} not found", role.id)))
    }
}
