//! Public Menu Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::Deserialize;
use shared::ErrorCode;
use shared::models::{Announcement, Category, CategoryMenu, MenuProduct, SiteSettings};

use crate::core::ServerState;
use crate::db::repository::Visibility;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category_id: Option<String>,
}

/// GET /api/menu/categories - 启用的分类
pub async fn categories(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.categories().list(Visibility::Public).await?;
    Ok(Json(categories))
}

/// GET /api/menu/categories/{id} - 分类页
///
/// 停用的分类与不存在的分类一样返回 404
pub async fn category_page(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CategoryMenu>> {
    let category = state
        .categories()
        .get(&id)
        .await?
        .filter(|c| c.is_active)
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id.clone()))?;

    let categories = std::slice::from_ref(&category);
    let products = state
        .products()
        .by_category(&id)
        .await?
        .into_iter()
        .map(|p| MenuProduct::resolve(p, categories))
        .collect();

    Ok(Json(CategoryMenu { category, products }))
}

/// GET /api/menu/products - 启用的商品 (含价格标签和分类名)
pub async fn products(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<MenuProduct>>> {
    let products_repo = state.products();
    let products = async {
        match query.category_id.as_deref().filter(|id| !id.is_empty()) {
            Some(category_id) => products_repo.by_category(category_id).await,
            None => products_repo.list(Visibility::Public).await,
        }
    };
    let categories_repo = state.categories();
    let (products, categories) =
        futures::try_join!(products, categories_repo.list(Visibility::All))?;

    Ok(Json(
        products
            .into_iter()
            .map(|p| MenuProduct::resolve(p, &categories))
            .collect(),
    ))
}

/// GET /api/menu/announcements - 当前展示的公告
pub async fn announcements(State(state): State<ServerState>) -> AppResult<Json<Vec<Announcement>>> {
    let announcements = state.announcements().displayed_at(Utc::now()).await?;
    Ok(Json(announcements))
}

/// GET /api/menu/settings - 站点设置
pub async fn settings(State(state): State<ServerState>) -> AppResult<Json<SiteSettings>> {
    Ok(Json(state.settings().get().await?))
}
