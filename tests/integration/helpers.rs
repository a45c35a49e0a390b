//! Shared test helpers for integration tests.
//!
//! Tests run the full router over in-memory stores, so no database is
//! required.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use accesshub_api::state::AppState;
use accesshub_auth::access::evaluator::AccessEvaluator;
use accesshub_auth::jwt::decoder::TokenDecoder;
use accesshub_auth::jwt::encoder::TokenEncoder;
use accesshub_auth::password::{PasswordHasher, PasswordValidator};
use accesshub_core::config::app::{CorsConfig, ServerConfig};
use accesshub_core::config::auth::AuthConfig;
use accesshub_core::config::logging::LoggingConfig;
use accesshub_core::config::{AppConfig, DatabaseConfig};
use accesshub_database::memory::{MemoryRoleStore, MemoryUserStore};
use accesshub_database::store::{RoleStore, UserStore};
use accesshub_service::role::RoleService;
use accesshub_service::user::UserService;

/// Password satisfying the default policy, used by all test users.
pub const TEST_PASSWORD: &str = "Str0ng!pass";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application backed by in-memory stores.
    pub fn new() -> Self {
        let config = test_config();

        let role_store: Arc<dyn RoleStore> = Arc::new(MemoryRoleStore::new());
        let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));

        let role_service = Arc::new(RoleService::new(Arc::clone(&role_store)));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_store),
            Arc::clone(&role_store),
            password_hasher,
            password_validator,
            token_encoder,
        ));
        let access_evaluator = Arc::new(AccessEvaluator::new(
            Arc::clone(&user_store),
            Arc::clone(&role_store),
        ));

        let app_state = AppState {
            config: Arc::new(config),
            token_decoder,
            role_service,
            user_service,
            access_evaluator,
        };

        Self {
            router: accesshub_api::router::build_router(app_state),
        }
    }

    /// Create a role via the API and return its id.
    pub async fn create_role(&self, name: &str, modules: &[&str]) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/role/add",
                Some(serde_json::json!({
                    "roleName": name,
                    "accessModule": modules,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Role creation failed: {:?}",
            response.body
        );
        response.data_id()
    }

    /// Register a user via the API and return their id.
    pub async fn register_user(&self, email: &str, role_id: Uuid) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/user/register",
                Some(serde_json::json!({
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": email,
                    "password": TEST_PASSWORD,
                    "roleId": role_id,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
        response.data_id()
    }

    /// Login and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/user/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Extracts `data.id` as a Uuid.
    pub fn data_id(&self) -> Uuid {
        self.body["data"]["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No id in response data")
    }

    /// Returns the envelope message.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            shutdown_grace_seconds: 5,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            provider: "memory".to_string(),
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        auth: AuthConfig::default(),
        logging: LoggingConfig::default(),
    }
}
