//! Repository Module
//!
//! Typed read/write helpers over the content collections. The shared CRUD
//! surface lives in [`Collection`]; kind-specific queries sit next to it.

pub mod admin;
pub mod announcement;
pub mod category;
pub mod collection;
pub mod product;
pub mod site_settings;
pub mod stats;

pub use admin::AdminRepository;
pub use announcement::{AnnouncementKind, AnnouncementRepository};
pub use category::{CategoryKind, CategoryRepository};
pub use collection::{Collection, RecordKind, Visibility};
pub use product::{ProductKind, ProductRepository};
pub use site_settings::SiteSettingsRepository;
pub use stats::StatsRepository;

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Store unreachable: {0}")]
    Connectivity(String),

    #[error("Store rejected credentials: {0}")]
    Permission(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        use surrealdb::error::{Api, Db};

        let message = err.to_string();
        match err {
            surrealdb::Error::Db(Db::IndexExists { .. }) => RepoError::Duplicate(message),
            surrealdb::Error::Db(Db::InvalidAuth) => RepoError::Permission(message),
            surrealdb::Error::Api(Api::ConnectionUninitialised)
            | surrealdb::Error::Api(Api::Ws(_))
            | surrealdb::Error::Api(Api::Http(_)) => RepoError::Connectivity(message),
            _ => RepoError::Database(message),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Connectivity(msg) => {
                tracing::error!(target: "database", error = %msg, "Store unreachable");
                AppError::connectivity(msg)
            }
            RepoError::Permission(msg) => {
                tracing::error!(target: "database", error = %msg, "Store permission denied");
                AppError::permission_denied(msg)
            }
            RepoError::Database(msg) => {
                tracing::error!(target: "database", error = %msg, "Database error");
                AppError::database(msg)
            }
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// API 层只见纯 key ("abc123")，存储层使用 surrealdb::RecordId：
//   - 构造: (TABLE, key) 元组直接传给 select / update / delete
//   - 取 key: crate::db::models::record_key(&id)
//
// 禁止在 API 中暴露 "table:key" 格式
