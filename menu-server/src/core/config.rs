use crate::auth::JwtConfig;
use crate::imaging::TransformOptions;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件会先被加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL / LOG_JSON / LOG_DIR | info / false / - | 日志 |
/// | DATABASE_URL | rocksdb://data/menu.db | SurrealDB 地址 |
/// | DATABASE_NAMESPACE / DATABASE_NAME | cafe / menu | 命名空间 / 数据库 |
/// | DATABASE_USER / DATABASE_PASS | - | 远程存储的 root 登录 |
/// | BLOB_BACKEND | github | github / s3 / memory |
/// | GITHUB_OWNER / GITHUB_REPO / GITHUB_TOKEN | - | 内容仓库 |
/// | GITHUB_BRANCH | main | 提交分支 |
/// | S3_BUCKET / S3_PUBLIC_URL / S3_ENDPOINT | - | 对象存储 |
/// | IMAGE_MAX_WIDTH / IMAGE_MAX_HEIGHT / IMAGE_QUALITY | 1200 / 1200 / 0.8 | 图片压缩 |
/// | UPLOAD_MAX_BYTES | 5242880 | 上传大小上限 |
/// | BOOTSTRAP_ADMIN_EMAIL / BOOTSTRAP_ADMIN_PASSWORD | - | 初始超级管理员 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=mem:// BLOB_BACKEND=memory HTTP_PORT=3000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    pub log: LogConfig,
    pub database: DatabaseConfig,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    pub blob: BlobConfig,
    pub image: TransformOptions,
    /// 管理端上传的原始文件大小上限 (字节)
    pub upload_max_bytes: usize,
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub dir: Option<String>,
}

impl LogConfig {
    /// 日志配置单独加载，先于其余配置初始化日志
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = var_or("ENVIRONMENT", "development") == "production";
        Ok(Self {
            level: var_or("LOG_LEVEL", "info"),
            json: parse_or("LOG_JSON", production)?,
            dir: var("LOG_DIR"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DatabaseConfig {
    /// In-memory database, used by tests
    pub fn memory() -> Self {
        Self {
            url: "mem://".to_string(),
            namespace: "cafe".to_string(),
            database: "menu".to_string(),
            username: None,
            password: None,
        }
    }
}

/// Which blob host backs image uploads
#[derive(Debug, Clone)]
pub enum BlobConfig {
    GitHub(GitHubConfig),
    S3(S3Config),
    Memory { public_base: String },
}

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub token: String,
    pub api_url: String,
    pub raw_host: String,
}

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub public_url: String,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

impl From<ConfigError> for shared::AppError {
    fn from(err: ConfigError) -> Self {
        shared::AppError::with_message(shared::ErrorCode::ConfigError, err.to_string())
    }
}

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn var_or(name: &str, default: &str) -> String {
    var(name).unwrap_or_else(|| default.to_string())
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    var(name).ok_or(ConfigError::Missing(name))
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match var(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；所选后端缺少必需变量时返回错误
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = var_or("ENVIRONMENT", "development");

        let log = LogConfig::from_env()?;

        let database = DatabaseConfig {
            url: var_or("DATABASE_URL", "rocksdb://data/menu.db"),
            namespace: var_or("DATABASE_NAMESPACE", "cafe"),
            database: var_or("DATABASE_NAME", "menu"),
            username: var("DATABASE_USER"),
            password: var("DATABASE_PASS"),
        };

        let quality: f32 = parse_or("IMAGE_QUALITY", 0.8)?;
        if !(0.0..=1.0).contains(&quality) || quality == 0.0 {
            return Err(ConfigError::Invalid {
                name: "IMAGE_QUALITY",
                value: quality.to_string(),
            });
        }
        let image = TransformOptions {
            max_width: parse_or("IMAGE_MAX_WIDTH", 1200)?,
            max_height: parse_or("IMAGE_MAX_HEIGHT", 1200)?,
            quality,
        };

        let bootstrap_admin = match (var("BOOTSTRAP_ADMIN_EMAIL"), var("BOOTSTRAP_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAdmin { email, password }),
            _ => None,
        };

        Ok(Self {
            http_port: parse_or("HTTP_PORT", 8080)?,
            log,
            database,
            jwt: JwtConfig::from_env(environment == "production")?,
            blob: blob_from_env()?,
            image,
            upload_max_bytes: parse_or("UPLOAD_MAX_BYTES", crate::upload::DEFAULT_MAX_UPLOAD_BYTES)?,
            bootstrap_admin,
            environment,
        })
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 测试配置: 内存数据库 + 内存图片存储
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            environment: "test".to_string(),
            log: LogConfig {
                level: "debug".to_string(),
                json: false,
                dir: None,
            },
            database: DatabaseConfig::memory(),
            jwt: JwtConfig::for_tests(),
            blob: BlobConfig::Memory {
                public_base: "http://localhost/blobs".to_string(),
            },
            image: TransformOptions::default(),
            upload_max_bytes: crate::upload::DEFAULT_MAX_UPLOAD_BYTES,
            bootstrap_admin: None,
        }
    }
}

fn blob_from_env() -> Result<BlobConfig, ConfigError> {
    match var_or("BLOB_BACKEND", "github").as_str() {
        "github" => Ok(BlobConfig::GitHub(GitHubConfig {
            owner: require("GITHUB_OWNER")?,
            repo: require("GITHUB_REPO")?,
            token: require("GITHUB_TOKEN")?,
            branch: var_or("GITHUB_BRANCH", "main"),
            api_url: var_or("GITHUB_API_URL", "https://api.github.com"),
            raw_host: var_or("GITHUB_RAW_HOST", "raw.githubusercontent.com"),
        })),
        "s3" => {
            let bucket = require("S3_BUCKET")?;
            let public_url = var("S3_PUBLIC_URL")
                .unwrap_or_else(|| format!("https://{}.s3.amazonaws.com", bucket));
            Ok(BlobConfig::S3(S3Config {
                public_url: public_url.trim_end_matches('/').to_string(),
                endpoint: var("S3_ENDPOINT"),
                bucket,
            }))
        }
        "memory" => Ok(BlobConfig::Memory {
            public_base: var_or("MEMORY_BLOB_BASE", "http://localhost/blobs"),
        }),
        other => Err(ConfigError::Invalid {
            name: "BLOB_BACKEND",
            value: other.to_string(),
        }),
    }
}
