//! 认证授权模块
//!
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前管理员上下文
//! - [`require_admin`] - 认证中间件 (`/api/admin/**`, `/api/auth/me`)
//! - [`require_super_admin`] - 管理员账号管理
//! - [`hash_password`] / [`verify_password`] - Argon2 密码哈希

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_super_admin};
pub use password::{hash_password, verify_password};
