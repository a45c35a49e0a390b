//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use accesshub_auth::access::evaluator::AccessEvaluator;
use accesshub_auth::jwt::decoder::TokenDecoder;
use accesshub_core::config::AppConfig;
use accesshub_service::role::RoleService;
use accesshub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Role lifecycle service.
    pub role_service: Arc<RoleService>,
    /// User lifecycle service.
    pub user_service: Arc<UserService>,
    /// Role-module access evaluator.
    pub access_evaluator: Arc<AccessEvaluator>,
}
