use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_admin;
use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app(max_upload_bytes: usize) -> Router<ServerState> {
    Router::<ServerState>::new()
        // Public
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::menu::router())
        // Admin
        .merge(crate::api::categories::router())
        .merge(crate::api::products::router())
        .merge(crate::api::announcements::router())
        .merge(crate::api::settings::router())
        .merge(crate::api::stats::router())
        .merge(crate::api::images::router(max_upload_bytes))
        .merge(crate::api::admins::router())
}

/// Router with state and middleware, ready to serve
pub fn build_router(state: ServerState) -> Router {
    build_app(state.config.upload_max_bytes)
        // 认证中间件 - require_admin 内部会跳过公共路由
        .layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_request))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
}
