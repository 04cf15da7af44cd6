//! Admin account management (super_admin only)

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::auth::require_super_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/admins", get(handler::list).post(handler::create))
        .route("/api/admin/admins/{id}", delete(handler::delete))
        // require_admin (全局) 先注入 CurrentUser
        .route_layer(middleware::from_fn(require_super_admin))
}
