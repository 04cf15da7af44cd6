use thiserror::Error;

/// 服务器启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] super::config::ConfigError),

    #[error("数据库初始化失败: {0}")]
    Database(#[from] crate::db::repository::RepoError),

    #[error("图片存储初始化失败: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("端口绑定失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
