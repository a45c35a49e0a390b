//! AccessHub Server — role-based access control backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use accesshub_api::state::AppState;
use accesshub_auth::access::evaluator::AccessEvaluator;
use accesshub_auth::jwt::decoder::TokenDecoder;
use accesshub_auth::jwt::encoder::TokenEncoder;
use accesshub_auth::password::{PasswordHasher, PasswordValidator};
use accesshub_core::config::AppConfig;
use accesshub_core::error::AppError;
use accesshub_database::connection::DatabasePool;
use accesshub_database::memory::{MemoryRoleStore, MemoryUserStore};
use accesshub_database::repositories::role::RoleRepository;
use accesshub_database::repositories::user::UserRepository;
use accesshub_database::store::{RoleStore, UserStore};
use accesshub_service::role::RoleService;
use accesshub_service::user::UserService;

#[tokio::main]
async fn main() {
    let env = std::env::var("ACCESSHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AccessHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Stores ───────────────────────────────────────────
    let (role_store, user_store): (Arc<dyn RoleStore>, Arc<dyn UserStore>) =
        match config.database.provider.as_str() {
            "memory" => {
                tracing::warn!("Using in-memory stores; all data is lost on restart");
                (
                    Arc::new(MemoryRoleStore::new()),
                    Arc::new(MemoryUserStore::new()),
                )
            }
            _ => {
                tracing::info!("Connecting to database...");
                let db = DatabasePool::connect(&config.database).await?;

                tracing::info!("Running database migrations...");
                accesshub_database::migration::run_migrations(db.pool()).await?;
                tracing::info!("Database migrations complete");

                (
                    Arc::new(RoleRepository::new(db.pool().clone())),
                    Arc::new(UserRepository::new(db.pool().clone())),
                )
            }
        };

    // ── Step 2: Auth primitives ──────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
    let token_decoder = Arc::new(TokenDecoder::new(&config.auth));

    // ── Step 3: Services ─────────────────────────────────────────
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

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        token_decoder,
        role_service,
        user_service,
        access_evaluator,
    };

    let app = accesshub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AccessHub server listening on {addr}");

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("AccessHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
