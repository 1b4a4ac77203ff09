//! Storefront account routes.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::models::{CurrentUser, session_keys};
use crate::services::auth::AuthService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/register
///
/// Creates the account and logs the new user in.
#[tracing::instrument(skip_all, fields(email = %req.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<CurrentUser>> {
    let user = AuthService::new(state.pool())
        .register(&req.email, &req.password)
        .await?;

    let current = CurrentUser::from(&user);
    session
        .insert(session_keys::CURRENT_USER, current.clone())
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(Json(current))
}

/// POST /auth/login
#[tracing::instrument(skip_all, fields(email = %req.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<CurrentUser>> {
    let user = AuthService::new(state.pool())
        .login(&req.email, &req.password)
        .await?;

    // Fresh session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session cycle failed: {e}")))?;

    let current = CurrentUser::from(&user);
    session
        .insert(session_keys::CURRENT_USER, current.clone())
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(Json(current))
}

/// POST /auth/logout
///
/// Drops only the login; the visitor's cart and favorites survive.
#[tracing::instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Json<Value>> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    Ok(Json(json!({ "ok": true })))
}

/// GET /auth/session
#[tracing::instrument(skip_all)]
pub async fn session(session: Session) -> Json<Value> {
    let current: Option<CurrentUser> = session
        .get(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten();

    Json(json!({ "user": current }))
}
