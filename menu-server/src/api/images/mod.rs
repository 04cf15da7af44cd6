//! Image Routes
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/admin/images | POST | multipart: `file`, 可选 `folder` / `previousUrl` |
//! | /api/admin/images | DELETE | `{ "url": "..." }` |

mod handler;

use axum::{Router, extract::DefaultBodyLimit, routing::post};

use crate::core::ServerState;

/// multipart 包装开销之外的余量
const BODY_OVERHEAD: usize = 64 * 1024;

pub fn router(max_upload_bytes: usize) -> Router<ServerState> {
    Router::new()
        .route(
            "/api/admin/images",
            post(handler::upload).delete(handler::delete),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes + BODY_OVERHEAD))
}
