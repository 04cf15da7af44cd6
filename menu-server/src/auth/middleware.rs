//! 认证中间件
//!
//! 为 JWT 认证和管理员授权提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::ErrorCode;

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// 无需登录的 API 路径
fn is_public_api_route(path: &str) -> bool {
    path == "/api/auth/login" || path == "/api/menu" || path.starts_with("/api/menu/")
}

/// 认证中间件 - 要求管理员登录
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT，然后按 `sub`
/// 重新读取管理员记录。验证成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (`/health` 等)
/// - `/api/auth/login`
/// - `/api/menu/**` (公开菜单)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 NotAuthenticated |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 TokenInvalid |
/// | 管理员记录已删除 | 401 NotAuthenticated |
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") || is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    let claims = match state.jwt_service.validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );
            return match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            };
        }
    };

    // 角色以数据库为准，记录删除后令牌立即失效
    let Some(admin) = state.admins().find_by_id(&claims.sub).await? else {
        security_log!(
            "WARN",
            "auth_revoked",
            admin_id = claims.sub.clone(),
            email = claims.email.clone()
        );
        return Err(AppError::unauthorized());
    };

    req.extensions_mut().insert(CurrentUser::from(admin));
    Ok(next.run(req).await)
}

/// 超级管理员中间件
///
/// 必须挂在 [`require_admin`] 之后。非超级管理员返回 403 SuperAdminRequired。
pub async fn require_super_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::unauthorized())?;

    if !user.is_super_admin() {
        security_log!(
            "WARN",
            "super_admin_required",
            admin_id = user.id.clone(),
            email = user.email.clone(),
            role = user.role.as_str()
        );
        return Err(AppError::new(ErrorCode::SuperAdminRequired));
    }

    Ok(next.run(req).await)
}
