//! Route definitions for the AccessHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Builds the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/role", role_routes())
        .nest("/user", user_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Role lifecycle endpoints.
fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(handlers::role::create_role))
        .route("/fetch", get(handlers::role::list_roles))
        .route("/edit/{id}", get(handlers::role::get_role))
        .route("/update/{id}", put(handlers::role::update_role))
        .route("/delete/{id}", delete(handlers::role::delete_role))
        .route("/addModules/{id}", patch(handlers::role::add_modules))
        .route(
            "/removeModules/{id}",
            delete(handlers::role::remove_modules),
        )
}

/// User lifecycle, login, access check, and bulk update endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::user::register))
        .route("/login", post(handlers::user::login))
        .route("/allUser", post(handlers::user::list_users))
        .route("/edit/{id}", get(handlers::user::get_user))
        .route("/update/{id}", put(handlers::user::update_user))
        .route("/delete/{id}", delete(handlers::user::delete_user))
        .route("/user-access", post(handlers::user::check_access))
        .route("/update-many-user", patch(handlers::user::update_many))
        .route(
            "/update-multiple-user",
            patch(handlers::user::update_multiple),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
