//! Menu Server - 咖啡馆阿拉伯语菜单后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SurrealDB 内容存储 (分类、商品、公告、站点设置、管理员)
//! - **图片** (`imaging`, `upload`, `storage`): 压缩流水线和可替换的图片存储后端
//! - **认证** (`auth`): JWT + Argon2，管理员角色
//! - **HTTP API** (`api`): 公开菜单 + 管理端接口
//!
//! # 模块结构
//!
//! ```text
//! menu-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT 认证、中间件、密码
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 路由组装
//! ├── db/            # 数据库层 (记录、仓储)
//! ├── imaging/       # 缩放 + JPEG 编码
//! ├── storage/       # BlobStore: 内容仓库 / S3 / 内存
//! ├── upload/        # 上传状态机和流水线
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod imaging;
pub mod services;
pub mod storage;
pub mod upload;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::build_router;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 加载 `.env` 并初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log = crate::core::config::LogConfig::from_env()?;
    init_logger_with_file(&log.level, log.json, log.dir.as_deref())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /__  ____  __  __
  / /|_/ / _ \/ __ \/ / / /
 / /  / /  __/ / / / /_/ /
/_/  /_/\___/_/ /_/\__,_/
        فخم البن
    "#
    );
}
