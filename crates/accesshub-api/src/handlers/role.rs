//! Role handlers — CRUD plus module-set edits.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use accesshub_entity::role::{NewRole, RoleChanges};

use crate::dto::request::{
    AddModulesRequest, CreateRoleRequest, RemoveModulesRequest, UpdateRoleRequest,
};
use crate::dto::response::{ApiResponse, RoleResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/role/add
pub async fn create_role(
    State(state): State<AppState>,
    Json(req): Json<CreateRoleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoleResponse>>), ApiError> {
    req.validate()?;

    let role = state
        .role_service
        .create(NewRole {
            role_name: req.role_name,
            access_modules: req.access_module,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Role created successfully", role.into())),
    ))
}

/// GET /api/role/fetch
pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RoleResponse>>>, ApiError> {
    let roles = state.role_service.list().await?;
    let data = roles.into_iter().map(RoleResponse::from).collect();

    Ok(Json(ApiResponse::ok("Roles fetched successfully", data)))
}

/// GET /api/role/edit/{id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RoleResponse>>, ApiError> {
    let role = state.role_service.get(id).await?;

    Ok(Json(ApiResponse::ok(
        "Role fetched successfully",
        role.into(),
    )))
}

/// PUT /api/role/update/{id}
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<ApiResponse<RoleResponse>>, ApiError> {
    let role = state
        .role_service
        .update(
            id,
            RoleChanges {
                role_name: req.role_name,
                access_modules: req.access_module,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        "Role updated successfully",
        role.into(),
    )))
}

/// DELETE /api/role/delete/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.role_service.soft_delete(id).await?;

    Ok(Json(ApiResponse::message("Role deleted successfully")))
}

/// PATCH /api/role/addModules/{id}
pub async fn add_modules(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddModulesRequest>,
) -> Result<Json<ApiResponse<RoleResponse>>, ApiError> {
    let role = state.role_service.add_modules(id, req.new_modules).await?;

    Ok(Json(ApiResponse::ok(
        "Access modules added successfully",
        role.into(),
    )))
}

/// DELETE /api/role/removeModules/{id}
pub async fn remove_modules(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RemoveModulesRequest>,
) -> Result<Json<ApiResponse<RoleResponse>>, ApiError> {
    let role = state
        .role_service
        .remove_modules(id, req.modules_to_remove)
        .await?;

    Ok(Json(ApiResponse::ok(
        "Access modules removed successfully",
        role.into(),
    )))
}
