//! 统一错误处理
//!
//! 错误类型统一定义在 `shared::error`，此处仅做 re-export，
//! 并提供服务端专用的转换 (multipart 等第三方错误)。
//!
//! # 错误码规范
//!
//! | 前缀 | 分类 | 示例 |
//! |------|------|------|
//! | E0xxx | 通用错误 | E0002 验证失败 |
//! | E1xxx | 认证错误 | E1001 未登录 |
//! | E2xxx | 权限错误 | E2002 需要超级管理员 |
//! | E3xxx | 菜单内容 | E3001 分类不存在 |
//! | E4xxx | 图片 | E4001 文件过大 |
//! | E9xxx | 系统错误 | E9002 数据库错误 |

use axum::extract::multipart::MultipartError;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Multipart body could not be read
pub fn multipart_error(e: MultipartError) -> AppError {
    AppError::with_message(ErrorCode::InvalidRequest, format!("Invalid multipart request: {}", e))
}
