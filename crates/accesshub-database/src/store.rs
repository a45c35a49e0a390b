//! Store traits — the seam between business logic and persistence.
//!
//! Services and the access evaluator hold `Arc<dyn RoleStore>` /
//! `Arc<dyn UserStore>` and never see a connection pool. Conflicting writes
//! are serialized by the implementation: PostgreSQL via its unique indexes
//! and row locks, the in-memory store via an `RwLock`.

use async_trait::async_trait;
use uuid::Uuid;

use accesshub_core::result::AppResult;
use accesshub_entity::role::{NewRole, Role};
use accesshub_entity::user::{NewUser, User};

/// Persistence operations for [`Role`] records.
#[async_trait]
pub trait RoleStore: Send + Sync + 'static {
    /// Find a role by primary key. Does not filter on status: soft-deleted
    /// roles remain addressable by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>>;

    /// Find a non-deleted role by its exact name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// List all non-deleted roles, oldest first.
    async fn list(&self) -> AppResult<Vec<Role>>;

    /// Insert a new role and return the stored record.
    async fn create(&self, data: &NewRole) -> AppResult<Role>;

    /// Persist the full state of an existing role.
    async fn update(&self, role: &Role) -> AppResult<Role>;
}

/// Persistence operations for [`User`] records.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key. Does not filter on status.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email, case-insensitively. Includes soft-deleted
    /// users: email uniqueness is global.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find all users whose id appears in `ids`, in no particular order.
    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<User>>;

    /// List non-deleted users, oldest first, optionally filtered by a
    /// case-insensitive prefix across first name, last name, and email.
    async fn list(&self, search: Option<&str>) -> AppResult<Vec<User>>;

    /// Insert a new user and return the stored record. Fails with a
    /// conflict error when the email is already taken.
    async fn create(&self, data: &NewUser) -> AppResult<User>;

    /// Persist the full state of an existing user.
    async fn update(&self, user: &User) -> AppResult<User>;
}
