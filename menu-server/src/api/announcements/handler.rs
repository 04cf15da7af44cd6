//! Announcement API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ErrorCode;
use shared::models::{Announcement, AnnouncementCreate, AnnouncementUpdate};

use crate::api::not_found_as;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::Visibility;
use crate::utils::validation::{validate_announcement_create, validate_announcement_update};
use crate::utils::{AppError, AppResult};

/// GET /api/admin/announcements - 获取所有公告 (priority 降序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Announcement>>> {
    Ok(Json(state.announcements().list(Visibility::All).await?))
}

/// GET /api/admin/announcements/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Announcement>> {
    let announcement = state
        .announcements()
        .get(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AnnouncementNotFound).with_detail("id", id))?;
    Ok(Json(announcement))
}

/// POST /api/admin/announcements - 创建公告
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AnnouncementCreate>,
) -> AppResult<Json<Announcement>> {
    validate_announcement_create(&payload)?;
    let announcement = state.announcements().create(payload).await?;

    tracing::info!(id = %announcement.id, title = %announcement.title_ar, by = %user.email, "Announcement created");
    Ok(Json(announcement))
}

/// PUT /api/admin/announcements/{id} - 更新公告 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AnnouncementUpdate>,
) -> AppResult<Json<Announcement>> {
    validate_announcement_update(&payload)?;
    let announcement = state
        .announcements()
        .update(&id, payload)
        .await
        .map_err(not_found_as(ErrorCode::AnnouncementNotFound, &id))?;
    Ok(Json(announcement))
}

/// DELETE /api/admin/announcements/{id}
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.announcements().delete(&id).await? {
        return Err(AppError::new(ErrorCode::AnnouncementNotFound).with_detail("id", id));
    }

    tracing::info!(id = %id, by = %user.email, "Announcement deleted");
    Ok(Json(true))
}
