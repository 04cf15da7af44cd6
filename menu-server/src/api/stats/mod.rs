//! Dashboard statistics

use axum::{Json, Router, extract::State, routing::get};
use shared::models::DashboardStats;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/admin/stats", get(dashboard))
}

/// GET /api/admin/stats - 分类 / 商品 / 启用商品 / 公告 数量
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    Ok(Json(state.stats().dashboard().await?))
}
