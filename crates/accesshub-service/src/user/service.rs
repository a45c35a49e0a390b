//! User lifecycle — registration, login, search, update, soft delete.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use accesshub_auth::jwt::encoder::{IssuedToken, TokenEncoder};
use accesshub_auth::password::{PasswordHasher, PasswordValidator};
use accesshub_core::error::AppError;
use accesshub_core::result::AppResult;
use accesshub_database::store::{RoleStore, UserStore};
use accesshub_entity::role::Role;
use accesshub_entity::status::RecordStatus;
use accesshub_entity::user::{NewUser, User, UserChanges};

/// One message for every credential failure. Unknown email, wrong password,
/// and deleted accounts are indistinguishable to the caller so the login
/// endpoint cannot be used to enumerate accounts.
pub(crate) const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Handles user lifecycle operations.
#[derive(Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Role store, for resolving role summaries.
    roles: Arc<dyn RoleStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Token encoder used at login.
    tokens: Arc<TokenEncoder>,
}

/// Data required to register a new user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Raw password; hashed before storage.
    pub password: String,
    /// Assigned role.
    pub role_id: Uuid,
}

/// A user together with its resolved role, if the reference is live.
#[derive(Debug, Clone)]
pub struct UserWithRole {
    /// The user record.
    pub user: User,
    /// The referenced role. `None` when the reference dangles.
    pub role: Option<Role>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// The user's role name. `None` when the role reference dangles.
    pub role_name: Option<String>,
    /// The freshly issued bearer token.
    pub token: IssuedToken,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        tokens: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            users,
            roles,
            hasher,
            validator,
            tokens,
        }
    }

    /// Registers a new user.
    ///
    /// The email must be unused across all users, including soft-deleted
    /// ones. The role reference is stored as given; it is not validated to
    /// point at an existing role.
    pub async fn register(&self, data: RegisterUser) -> AppResult<User> {
        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("Email already exists"));
        }

        self.validator.validate(&data.password)?;
        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .users
            .create(&NewUser {
                first_name: data.first_name,
                last_name: data.last_name,
                email: data.email,
                password_hash,
                role_id: data.role_id,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Authenticates a user and issues a bearer token.
    ///
    /// An inactive account is only reported as such after the password
    /// verifies; everything else collapses into [`INVALID_CREDENTIALS`].
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        if user.status.is_deleted() {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        if !user.is_active {
            return Err(AppError::forbidden("Account is inactive"));
        }

        let token = self.tokens.issue(user.id, &user.email, user.role_id)?;
        let role_name = self
            .roles
            .find_by_id(user.role_id)
            .await?
            .map(|r| r.role_name);

        info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome {
            user,
            role_name,
            token,
        })
    }

    /// Lists non-deleted users, each with its resolved role.
    ///
    /// `search` filters by a case-insensitive prefix across first name,
    /// last name, and email. An empty result is reported as not-found.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<UserWithRole>> {
        let users = self.users.list(search).await?;
        if users.is_empty() {
            return Err(AppError::not_found("No users found"));
        }
        self.with_roles(users).await
    }

    /// Fetches a user by id with its resolved role. Soft-deleted users
    /// still resolve here.
    pub async fn get(&self, id: Uuid) -> AppResult<UserWithRole> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let role = self.roles.find_by_id(user.role_id).await?;
        Ok(UserWithRole { user, role })
    }

    /// Applies a partial update. A new email must be unused by any other
    /// user.
    pub async fn update(&self, id: Uuid, changes: UserChanges) -> AppResult<User> {
        if let Some(email) = &changes.email
            && let Some(existing) = self.users.find_by_email(email).await?
            && existing.id != id
        {
            return Err(AppError::conflict("Email already exists"));
        }

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if let Some(first_name) = changes.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(role_id) = changes.role_id {
            user.role_id = role_id;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }

        user.updated_at = Utc::now();
        let user = self.users.update(&user).await?;

        info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Soft-deletes a user. The record stays addressable by id.
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        user.status = RecordStatus::Deleted;
        user.updated_at = Utc::now();
        self.users.update(&user).await?;

        info!(user_id = %id, "User soft-deleted");
        Ok(())
    }

    pub(crate) fn user_store(&self) -> &Arc<dyn UserStore> {
        &self.users
    }

    async fn with_roles(&self, users: Vec<User>) -> AppResult<Vec<UserWithRole>> {
        let mut cache: HashMap<Uuid, Option<Role>> = HashMap::new();
        let mut out = Vec::with_capacity(users.len());
        for user in users {
            let role = match cache.get(&user.role_id) {
                Some(role) => role.clone(),
                None => {
                    let role = self.roles.find_by_id(user.role_id).await?;
                    cache.insert(user.role_id, role.clone());
                    role
                }
            };
            out.push(UserWithRole { user, role });
        }
        Ok(out)
    }
}
