//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ErrorCode;
use shared::models::{MenuProduct, Product, ProductCreate, ProductUpdate};

use crate::api::not_found_as;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::Visibility;
use crate::utils::validation::{validate_product_create, validate_product_update};
use crate::utils::{AppError, AppResult};

/// 商品必须引用已存在的分类
async fn ensure_category(state: &ServerState, category_id: &str) -> AppResult<()> {
    match state.categories().get(category_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::new(ErrorCode::CategoryNotFound)
            .with_detail("field", "categoryId")
            .with_detail("id", category_id)),
    }
}

/// GET /api/admin/products - 获取所有商品 (含停用，附价格标签和分类名)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuProduct>>> {
    let products = state.products().list(Visibility::All).await?;
    let categories = state.categories().list(Visibility::All).await?;
    Ok(Json(
        products
            .into_iter()
            .map(|p| MenuProduct::resolve(p, &categories))
            .collect(),
    ))
}

/// GET /api/admin/products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state
        .products()
        .get(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;
    Ok(Json(product))
}

/// POST /api/admin/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    validate_product_create(&payload)?;
    ensure_category(&state, &payload.category_id).await?;

    let product = state.products().create(payload).await?;
    tracing::info!(id = %product.id, name = %product.name_ar, by = %user.email, "Product created");
    Ok(Json(product))
}

/// PUT /api/admin/products/{id} - 更新商品 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    validate_product_update(&payload)?;
    if let Some(category_id) = &payload.category_id {
        ensure_category(&state, category_id).await?;
    }

    let product = state
        .products()
        .update(&id, payload)
        .await
        .map_err(not_found_as(ErrorCode::ProductNotFound, &id))?;
    Ok(Json(product))
}

/// DELETE /api/admin/products/{id} - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.products().delete(&id).await? {
        return Err(AppError::new(ErrorCode::ProductNotFound).with_detail("id", id));
    }

    tracing::info!(id = %id, by = %user.email, "Product deleted");
    Ok(Json(true))
}
