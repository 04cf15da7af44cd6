//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ErrorCode;
use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::api::not_found_as;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::Visibility;
use crate::utils::validation::{validate_category_create, validate_category_update};
use crate::utils::{AppError, AppResult};

/// GET /api/admin/categories - 获取所有分类 (含停用)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.categories().list(Visibility::All).await?;
    Ok(Json(categories))
}

/// GET /api/admin/categories/{id} - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let category = state
        .categories()
        .get(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id))?;
    Ok(Json(category))
}

/// POST /api/admin/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    validate_category_create(&payload)?;
    let category = state.categories().create(payload).await?;

    tracing::info!(id = %category.id, name = %category.name_ar, by = %user.email, "Category created");
    Ok(Json(category))
}

/// PUT /api/admin/categories/{id} - 更新分类 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    validate_category_update(&payload)?;
    let category = state
        .categories()
        .update(&id, payload)
        .await
        .map_err(not_found_as(ErrorCode::CategoryNotFound, &id))?;
    Ok(Json(category))
}

/// DELETE /api/admin/categories/{id} - 删除分类
///
/// 商品不会级联删除，公开菜单上显示为 "غير محدد"
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.categories().delete(&id).await? {
        return Err(AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id));
    }

    tracing::info!(id = %id, by = %user.email, "Category deleted");
    Ok(Json(true))
}
