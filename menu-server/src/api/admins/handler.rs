//! Admin Account Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ErrorCode;
use shared::models::{Admin, AdminCreate};

use crate::auth::{CurrentUser, hash_password};
use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::security_log;
use crate::utils::validation::{validate_email, validate_password};
use crate::utils::{AppError, AppResult};

/// GET /api/admin/admins
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Admin>>> {
    Ok(Json(state.admins().list().await?))
}

/// POST /api/admin/admins - 创建管理员
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AdminCreate>,
) -> AppResult<Json<Admin>> {
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    let hash = hash_password(&payload.password)?;
    let admin = state
        .admins()
        .create(&payload.email, hash, payload.role)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::new(ErrorCode::AdminEmailExists)
                .with_detail("field", "email"),
            other => other.into(),
        })?;

    security_log!(
        "INFO",
        "admin_created",
        admin_id = admin.id.clone(),
        email = admin.email.clone(),
        role = admin.role.as_str(),
        by = user.email.clone()
    );
    Ok(Json(admin))
}

/// DELETE /api/admin/admins/{id} - 删除管理员 (不能删除自己)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if id == user.id {
        return Err(AppError::new(ErrorCode::CannotDeleteSelf));
    }

    if !state.admins().delete(&id).await? {
        return Err(AppError::new(ErrorCode::AdminNotFound).with_detail("id", id));
    }

    security_log!("INFO", "admin_deleted", admin_id = id.clone(), by = user.email.clone());
    Ok(Json(true))
}
