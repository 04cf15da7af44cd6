//! Public menu routes (no authentication)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/menu/categories | GET | 启用的分类 (按 order 升序) |
//! | /api/menu/categories/{id} | GET | 分类页: 分类 + 启用的商品 |
//! | /api/menu/products | GET | 启用的商品，可按 `?categoryId=` 过滤 |
//! | /api/menu/announcements | GET | 当前展示的公告 |
//! | /api/menu/settings | GET | 站点设置 (未保存时为默认值) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/categories", get(handler::categories))
        .route("/categories/{id}", get(handler::category_page))
        .route("/products", get(handler::products))
        .route("/announcements", get(handler::announcements))
        .route("/settings", get(handler::settings))
}
