use std::sync::Arc;

use shared::models::AdminRole;

use crate::auth::{JwtService, hash_password};
use crate::core::{Config, Result, ServerError};
use crate::db::repository::{
    AdminRepository, AnnouncementRepository, CategoryRepository, ProductRepository,
    SiteSettingsRepository, StatsRepository,
};
use crate::db::{Database, DbService};
use crate::storage::{self, BlobStore};
use crate::upload::ImagePipeline;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是浅拷贝 (Arc 或 SurrealDB 句柄)，每个请求克隆一份。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SurrealDB 连接 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | blob_store | Arc<dyn BlobStore> | 图片存储后端 |
/// | pipeline | ImagePipeline | 图片压缩上传流水线 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub jwt_service: Arc<JwtService>,
    pub blob_store: Arc<dyn BlobStore>,
    pub pipeline: ImagePipeline,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("environment", &self.config.environment)
            .field("blob_store", &self.blob_store.name())
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 由已就绪的组件构造 (测试可注入内存存储)
    pub fn new(config: Config, db: DbService, blob_store: Arc<dyn BlobStore>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let pipeline = ImagePipeline::new(
            blob_store.clone(),
            config.image,
            config.upload_max_bytes,
        );
        Self {
            config,
            db,
            jwt_service,
            blob_store,
            pipeline,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 连接数据库并应用 schema
    /// 2. 创建图片存储后端
    /// 3. 管理员表为空时创建初始超级管理员
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(&config.database).await?;
        let blob_store = storage::from_config(&config.blob).await?;

        let state = Self::new(config.clone(), db, blob_store);
        state.bootstrap_admin().await?;
        Ok(state)
    }

    /// 内存数据库 + 配置中的存储后端 (`Config::for_tests` 为内存存储)
    pub async fn for_tests(config: Config) -> Result<Self> {
        let db = DbService::memory().await?;
        let blob_store = storage::from_config(&config.blob).await?;
        Ok(Self::new(config, db, blob_store))
    }

    async fn bootstrap_admin(&self) -> Result<()> {
        let Some(seed) = &self.config.bootstrap_admin else {
            return Ok(());
        };

        let admins = self.admins();
        if admins.count().await? > 0 {
            return Ok(());
        }

        let hash = hash_password(&seed.password)
            .map_err(|e| ServerError::Internal(e.into()))?;
        let admin = admins.create(&seed.email, hash, AdminRole::SuperAdmin).await?;
        tracing::info!(email = %admin.email, "👤 Bootstrap super admin created");
        Ok(())
    }

    pub fn get_db(&self) -> Database {
        self.db.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.get_db())
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.get_db())
    }

    pub fn announcements(&self) -> AnnouncementRepository {
        AnnouncementRepository::new(self.get_db())
    }

    pub fn settings(&self) -> SiteSettingsRepository {
        SiteSettingsRepository::new(self.get_db())
    }

    pub fn admins(&self) -> AdminRepository {
        AdminRepository::new(self.get_db())
    }

    pub fn stats(&self) -> StatsRepository {
        StatsRepository::new(self.get_db())
    }
}
