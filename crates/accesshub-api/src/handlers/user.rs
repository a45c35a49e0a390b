//! User handlers — registration, login, CRUD, access checks, bulk updates.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use accesshub_auth::access::evaluator::AccessDecision;
use accesshub_core::error::AppError;
use accesshub_entity::user::UserChanges;
use accesshub_service::user::{BulkUpdateReport, RegisterUser};

use crate::dto::request::{
    AccessCheckRequest, LoginRequest, RegisterRequest, SearchUsersRequest, UpdateManyRequest,
    UpdateMultipleRequest, UpdateUserRequest,
};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/user/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()?;

    let user = state
        .user_service
        .register(RegisterUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            role_id: req.role_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("User registered successfully", user.into())),
    ))
}

/// POST /api/user/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()?;

    let outcome = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok("Login successful", outcome.into())))
}

/// POST /api/user/allUser
pub async fn list_users(
    State(state): State<AppState>,
    Json(req): Json<SearchUsersRequest>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state.user_service.list(req.search.as_deref()).await?;
    let data = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(ApiResponse::ok("Users fetched successfully", data)))
}

/// GET /api/user/edit/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get(id).await?;

    Ok(Json(ApiResponse::ok(
        "User fetched successfully",
        user.into(),
    )))
}

/// PUT /api/user/update/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_service
        .update(
            id,
            UserChanges {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                role_id: req.role_id,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        "User updated successfully",
        user.into(),
    )))
}

/// DELETE /api/user/delete/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.user_service.soft_delete(id).await?;

    Ok(Json(ApiResponse::message("User deleted successfully")))
}

/// POST /api/user/user-access
///
/// Checks whether the authenticated caller's role grants the requested
/// module. The comparison is case-insensitive.
pub async fn check_access(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AccessCheckRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let module = match req.access_to_module.as_deref() {
        Some(module) if !module.trim().is_empty() => module,
        _ => return Err(AppError::validation("Access module is required").into()),
    };

    match state.access_evaluator.evaluate(auth.user_id, module).await? {
        AccessDecision::Allowed => Ok(Json(ApiResponse::message(format!(
            "You have permission for '{module}'."
        )))),
        AccessDecision::Denied(reason) => {
            tracing::debug!(user_id = %auth.user_id, module, ?reason, "Access denied");
            Err(AppError::forbidden(format!(
                "Access denied. You do not have permission for '{module}'."
            ))
            .into())
        }
    }
}

/// PATCH /api/user/update-many-user
pub async fn update_many(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<UpdateManyRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let count = state
        .user_service
        .update_many(req.ids, req.first_name, req.last_name)
        .await?;

    Ok(Json(ApiResponse::message(format!(
        "{count} users updated successfully."
    ))))
}

/// PATCH /api/user/update-multiple-user
pub async fn update_multiple(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<UpdateMultipleRequest>,
) -> Result<Json<ApiResponse<BulkUpdateReport>>, ApiError> {
    let report = state.user_service.update_multiple(req.users).await?;

    Ok(Json(ApiResponse::ok(
        format!("{} users updated successfully.", report.modified_count),
        report,
    )))
}
