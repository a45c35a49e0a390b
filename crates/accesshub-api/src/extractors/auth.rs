//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, verifies it, and injects the caller context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use accesshub_core::error::AppError;
use accesshub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.token_decoder.decode(token)?;
        let (user_id, role_id) = (claims.user_id(), claims.role_id());

        Ok(AuthUser(RequestContext::new(user_id, claims.email, role_id)))
    }
}
