//! Admin user management routes. Super admin only.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use magi_core::{AdminRole, AdminUserId};

use crate::db::AdminUserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireSuperAdmin;
use crate::models::AdminUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// GET /admin-users
#[tracing::instrument(skip(state, _admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireSuperAdmin(_admin): RequireSuperAdmin,
) -> Result<Json<Vec<AdminUser>>> {
    let admins = AdminUserRepository::new(state.pool()).list().await?;
    Ok(Json(admins))
}

#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: AdminRole,
}

/// POST /admin-users
#[tracing::instrument(skip(state, admin, req), fields(granted_by = %admin.email))]
pub async fn create(
    State(state): State<AppState>,
    RequireSuperAdmin(admin): RequireSuperAdmin,
    Json(req): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<AdminUser>)> {
    let created = AuthService::new(state.pool())
        .create_admin(&req.email, &req.name, &req.password, req.role)
        .await?;

    tracing::info!(admin_id = %created.id, role = %created.role, "admin access granted");
    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: AdminRole,
}

/// POST /admin-users/{id}/role
#[tracing::instrument(skip(state, admin), fields(changed_by = %admin.email))]
pub async fn set_role(
    State(state): State<AppState>,
    RequireSuperAdmin(admin): RequireSuperAdmin,
    Path(id): Path<AdminUserId>,
    Json(req): Json<SetRoleRequest>,
) -> Result<Json<AdminUser>> {
    if id == admin.id {
        return Err(AppError::BadRequest(
            "cannot change your own role".to_owned(),
        ));
    }

    let updated = AdminUserRepository::new(state.pool())
        .set_role(id, req.role)
        .await?;

    tracing::info!(admin_id = %id, role = %req.role, "admin role changed");
    Ok(Json(updated))
}

/// DELETE /admin-users/{id}
#[tracing::instrument(skip(state, admin), fields(revoked_by = %admin.email))]
pub async fn destroy(
    State(state): State<AppState>,
    RequireSuperAdmin(admin): RequireSuperAdmin,
    Path(id): Path<AdminUserId>,
) -> Result<StatusCode> {
    if id == admin.id {
        return Err(AppError::BadRequest(
            "cannot revoke your own access".to_owned(),
        ));
    }

    AdminUserRepository::new(state.pool()).delete(id).await?;

    tracing::info!(admin_id = %id, "admin access revoked");
    Ok(StatusCode::NO_CONTENT)
}
