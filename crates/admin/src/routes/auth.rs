//! Admin login and session routes.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::models::{CurrentAdmin, session_keys};
use crate::services::auth::AuthService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login
#[tracing::instrument(skip_all, fields(email = %req.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<Json<CurrentAdmin>> {
    let admin = AuthService::new(state.pool())
        .login(&req.email, &req.password)
        .await?;

    // Fresh session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session cycle failed: {e}")))?;

    let current = CurrentAdmin::from(&admin);
    session
        .insert(session_keys::CURRENT_ADMIN, current.clone())
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    tracing::info!(admin_id = %admin.id, role = %admin.role, "admin logged in");
    Ok(Json(current))
}

/// POST /auth/logout
#[tracing::instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Json<Value>> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("session flush failed: {e}")))?;

    Ok(Json(json!({ "ok": true })))
}

/// GET /auth/session
#[tracing::instrument(skip_all)]
pub async fn session(session: Session) -> Json<Value> {
    let current: Option<CurrentAdmin> = session
        .get(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten();

    Json(json!({ "admin": current }))
}
