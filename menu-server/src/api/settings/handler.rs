use axum::{Json, extract::State};
use shared::models::{SiteSettings, SiteSettingsUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::validate_settings_update;

/// GET /api/admin/settings - 站点设置 (未保存时为默认值)
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<SiteSettings>> {
    Ok(Json(state.settings().get().await?))
}

/// PUT /api/admin/settings - 更新站点设置 (首次保存时创建)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<SiteSettingsUpdate>,
) -> AppResult<Json<SiteSettings>> {
    validate_settings_update(&payload)?;
    let settings = state.settings().upsert(payload).await?;

    tracing::info!(by = %user.email, "Site settings updated");
    Ok(Json(settings))
}
