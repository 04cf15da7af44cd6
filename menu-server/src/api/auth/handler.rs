//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{Admin, LoginRequest, LoginResponse};

use crate::AppError;
use crate::auth::{CurrentUser, verify_password};
use crate::core::ServerState;
use crate::security_log;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login
///
/// Unknown email and wrong password both yield InvalidCredentials.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let credentials = state.admins().find_credentials(&req.email).await?;

    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let admin = match credentials {
        Some((admin, hash)) if verify_password(&req.password, &hash) => admin,
        Some(_) => {
            security_log!("WARN", "login_failed", email = req.email.clone(), reason = "invalid_password");
            return Err(AppError::invalid_credentials());
        }
        None => {
            security_log!("WARN", "login_failed", email = req.email.clone(), reason = "unknown_email");
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        admin_id = %admin.id,
        email = %admin.email,
        role = admin.role.as_str(),
        "Admin logged in"
    );

    Ok(Json(LoginResponse {
        token,
        expires_in: jwt_service.expires_in_seconds(),
        admin,
    }))
}

/// GET /api/auth/me
pub async fn me(State(state): State<ServerState>, user: CurrentUser) -> Result<Json<Admin>, AppError> {
    let admin = state
        .admins()
        .find_by_id(&user.id)
        .await?
        .ok_or_else(AppError::unauthorized)?;
    Ok(Json(admin))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; the client drops its copy.
pub async fn logout(user: CurrentUser) -> Json<()> {
    tracing::info!(admin_id = %user.id, email = %user.email, "Admin logged out");
    Json(())
}
