//! The access evaluator — decides whether a user may reach a module.

use std::sync::Arc;

use uuid::Uuid;

use accesshub_core::result::AppResult;
use accesshub_database::store::{RoleStore, UserStore};

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The user's role grants the requested module.
    Allowed,
    /// Access is refused for the given reason.
    Denied(DenyReason),
}

/// Why an access check was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The user id did not resolve.
    UserNotFound,
    /// The user's role reference did not resolve.
    RoleNotFound,
    /// The role exists but is flagged inactive.
    RoleInactive,
    /// The role does not grant the requested module.
    ModuleNotGranted,
}

/// Resolves user → role → module membership.
///
/// A pure read path: no side effects, deterministic for unchanged store
/// contents, safe to call concurrently. Module comparison is
/// case-insensitive on both sides.
#[derive(Clone)]
pub struct AccessEvaluator {
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
}

impl AccessEvaluator {
    /// Creates a new evaluator over the given stores.
    pub fn new(users: Arc<dyn UserStore>, roles: Arc<dyn RoleStore>) -> Self {
        Self { users, roles }
    }

    /// Decides whether `user_id` may access `requested_module`.
    ///
    /// The role lookup deliberately does not filter on soft deletion (a
    /// dangling or deleted role simply fails to grant), but an inactive
    /// role denies outright.
    pub async fn evaluate(
        &self,
        user_id: Uuid,
        requested_module: &str,
    ) -> AppResult<AccessDecision> {
        let Some(user) = self.users.find_by_id(user_id).await? else {
            return Ok(AccessDecision::Denied(DenyReason::UserNotFound));
        };

        let Some(role) = self.roles.find_by_id(user.role_id).await? else {
            return Ok(AccessDecision::Denied(DenyReason::RoleNotFound));
        };

        if !role.is_active {
            return Ok(AccessDecision::Denied(DenyReason::RoleInactive));
        }

        if role.grants_module(requested_module) {
            Ok(AccessDecision::Allowed)
        } else {
            Ok(AccessDecision::Denied(DenyReason::ModuleNotGranted))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accesshub_database::memory::{MemoryRoleStore, MemoryUserStore};
    use accesshub_database::store::{RoleStore, UserStore};
    use accesshub_entity::role::NewRole;
    use accesshub_entity::user::NewUser;

    async fn setup(modules: &[&str]) -> (AccessEvaluator, Uuid, Uuid) {
        let roles = Arc::new(MemoryRoleStore::new());
        let users = Arc::new(MemoryUserStore::new());

        let role = roles
            .create(&NewRole {
                role_name: "support".to_string(),
                access_modules: modules.iter().map(|m| m.to_string()).collect(),
            })
            .await
            .unwrap();

        let user = users
            .create(&NewUser {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password_hash: "hash".to_string(),
                role_id: role.id,
            })
            .await
            .unwrap();

        (
            AccessEvaluator::new(users, roles.clone()),
            user.id,
            role.id,
        )
    }

    #[tokio::test]
    async fn allows_case_insensitive_module_match() {
        let (evaluator, user_id, _) = setup(&["Billing"]).await;
        assert_eq!(
            evaluator.evaluate(user_id, "billing").await.unwrap(),
            AccessDecision::Allowed
        );
        assert_eq!(
            evaluator.evaluate(user_id, "BILLING").await.unwrap(),
            AccessDecision::Allowed
        );
    }

    #[tokio::test]
    async fn denies_module_not_granted() {
        let (evaluator, user_id, _) = setup(&["Billing"]).await;
        assert_eq!(
            evaluator.evaluate(user_id, "invoice").await.unwrap(),
            AccessDecision::Denied(DenyReason::ModuleNotGranted)
        );
    }

    #[tokio::test]
    async fn denies_unknown_user() {
        let (evaluator, _, _) = setup(&["Billing"]).await;
        assert_eq!(
            evaluator.evaluate(Uuid::new_v4(), "billing").await.unwrap(),
            AccessDecision::Denied(DenyReason::UserNotFound)
        );
    }

    #[tokio::test]
    async fn denies_dangling_role_reference() {
        let roles = Arc::new(MemoryRoleStore::new());
        let users = Arc::new(MemoryUserStore::new());
        let user = users
            .create(&NewUser {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password_hash: "hash".to_string(),
                role_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        let evaluator = AccessEvaluator::new(users, roles);
        assert_eq!(
            evaluator.evaluate(user.id, "billing").await.unwrap(),
            AccessDecision::Denied(DenyReason::RoleNotFound)
        );
    }

    // The original system stored the role's active flag but never consulted
    // it during access checks. Enforcing it here is an intentional change.
    #[tokio::test]
    async fn denies_when_role_inactive() {
        let roles = Arc::new(MemoryRoleStore::new());
        let users = Arc::new(MemoryUserStore::new());

        let mut role = roles
            .create(&NewRole {
                role_name: "support".to_string(),
                access_modules: vec!["Billing".to_string()],
            })
            .await
            .unwrap();
        role.is_active = false;
        roles.update(&role).await.unwrap();

        let user = users
            .create(&NewUser {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password_hash: "hash".to_string(),
                role_id: role.id,
            })
            .await
            .unwrap();

        let evaluator = AccessEvaluator::new(users, roles);
        assert_eq!(
            evaluator.evaluate(user.id, "billing").await.unwrap(),
            AccessDecision::Denied(DenyReason::RoleInactive)
        );
    }

    #[tokio::test]
    async fn evaluation_is_repeatable() {
        let (evaluator, user_id, _) = setup(&["Billing"]).await;
        for _ in 0..3 {
            assert_eq!(
                evaluator.evaluate(user_id, "billing").await.unwrap(),
                AccessDecision::Allowed
            );
        }
    }
}
