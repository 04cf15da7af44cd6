//! JWT 令牌服务
//!
//! 处理管理员令牌的生成、验证和解析。

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use shared::models::{Admin, AdminRole};
use thiserror::Error;

use crate::core::ConfigError;

/// Minimum secret length in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// JWT 配置
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT 密钥 (至少 32 字节)
    pub secret: String,
    /// 令牌过期时间 (分钟)
    pub expiration_minutes: i64,
    /// 令牌签发者
    pub issuer: String,
    /// 令牌受众
    pub audience: String,
}

impl JwtConfig {
    /// 从环境变量加载
    ///
    /// 生产环境必须设置 `JWT_SECRET`；开发环境缺省时生成临时密钥
    /// (重启后已签发的令牌全部失效)。
    pub fn from_env(production: bool) -> Result<Self, ConfigError> {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if secret.len() >= MIN_SECRET_LEN => secret,
            Ok(secret) => {
                return Err(ConfigError::Invalid {
                    name: "JWT_SECRET",
                    value: format!("{} bytes, at least {} required", secret.len(), MIN_SECRET_LEN),
                });
            }
            Err(_) if production => return Err(ConfigError::Missing("JWT_SECRET")),
            Err(_) => {
                tracing::warn!("⚠️  JWT_SECRET not set! Generating temporary key for development.");
                generate_printable_secret()
            }
        };

        Ok(Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(480), // 默认 8 小时
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "menu-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "menu-admin".to_string()),
        })
    }

    /// 测试用固定配置
    pub fn for_tests() -> Self {
        Self {
            secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
            expiration_minutes: 60,
            issuer: "menu-server".to_string(),
            audience: "menu-admin".to_string(),
        }
    }
}

/// 存储在令牌中的 JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 管理员 ID (principal)
    pub sub: String,
    pub email: String,
    /// 签发时的角色 (仅供展示，授权以数据库为准)
    pub role: AdminRole,
    /// 过期时间戳
    pub exp: i64,
    /// 签发时间戳
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

/// JWT 错误
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("无效令牌: {0}")]
    InvalidToken(String),

    #[error("令牌已过期")]
    ExpiredToken,

    #[error("无效签名")]
    InvalidSignature,

    #[error("令牌生成失败: {0}")]
    GenerationFailed(String),
}

/// 生成可打印的随机密钥 (开发环境)
pub fn generate_printable_secret() -> String {
    const ALLOWED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 64];
    if rng.fill(&mut bytes).is_err() {
        // 随机源不可用时退化为 rand 线程随机数
        return shared::util::random_base36(64);
    }
    bytes
        .iter()
        .map(|b| ALLOWED[*b as usize % ALLOWED.len()] as char)
        .collect()
}

/// JWT 令牌服务
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 为管理员生成令牌
    pub fn generate_token(&self, admin: &Admin) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: admin.id.clone(),
            email: admin.email.clone(),
            role: admin.role,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// 验证并解码令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// 从 Authorization 头提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").map(str::trim).filter(|t| !t.is_empty())
    }

    /// 令牌有效期 (秒)
    pub fn expires_in_seconds(&self) -> i64 {
        self.config.expiration_minutes * 60
    }
}

/// 当前管理员上下文
///
/// 由认证中间件在确认管理员记录仍然存在后创建，注入到请求扩展。
/// `role` 来自数据库而不是令牌，删除管理员记录即撤销访问。
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub role: AdminRole,
}

impl From<Admin> for CurrentUser {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            role: admin.role,
        }
    }
}

impl CurrentUser {
    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(role: AdminRole) -> Admin {
        Admin {
            id: "a1".to_string(),
            email: "owner@fakhr.cafe".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn token_round_trip() {
        let service = JwtService::with_config(JwtConfig::for_tests());
        let token = service.generate_token(&admin(AdminRole::SuperAdmin)).unwrap();

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "a1");
        assert_eq!(claims.email, "owner@fakhr.cafe");
        assert_eq!(claims.role, AdminRole::SuperAdmin);
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let issuer = JwtService::with_config(JwtConfig::for_tests());
        let token = issuer.generate_token(&admin(AdminRole::Admin)).unwrap();

        let other = JwtService::with_config(JwtConfig {
            secret: "a-completely-different-secret-of-enough-length".to_string(),
            ..JwtConfig::for_tests()
        });
        assert!(matches!(other.validate_token(&token), Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let service = JwtService::with_config(JwtConfig {
            expiration_minutes: -10,
            ..JwtConfig::for_tests()
        });
        let token = service.generate_token(&admin(AdminRole::Admin)).unwrap();
        assert!(matches!(service.validate_token(&token), Err(JwtError::ExpiredToken)));
    }

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
    }

    #[test]
    fn printable_secret_is_long_enough() {
        let a = generate_printable_secret();
        assert!(a.len() >= MIN_SECRET_LEN);
        assert_ne!(a, generate_printable_secret());
    }
}
