//! Database Module
//!
//! SurrealDB connection and the content record store built on top of it.
//! Any engine reachable through `surrealdb::engine::any` is accepted, so
//! `mem://` backs the tests and `rocksdb://` backs a single-node deployment.

pub mod models;
pub mod repository;
pub mod timestamp;

use crate::core::DatabaseConfig;
use repository::RepoResult;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

/// Shared database handle type
pub type Database = Surreal<Any>;

/// Table and index definitions, applied on every start
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS categories SCHEMALESS;
DEFINE TABLE IF NOT EXISTS products SCHEMALESS;
DEFINE TABLE IF NOT EXISTS announcements SCHEMALESS;
DEFINE TABLE IF NOT EXISTS settings SCHEMALESS;
DEFINE TABLE IF NOT EXISTS admins SCHEMALESS;
DEFINE INDEX IF NOT EXISTS categories_active_order ON TABLE categories COLUMNS is_active, sort_order;
DEFINE INDEX IF NOT EXISTS products_active_order ON TABLE products COLUMNS is_active, sort_order;
DEFINE INDEX IF NOT EXISTS products_category ON TABLE products COLUMNS category_id;
DEFINE INDEX IF NOT EXISTS announcements_active_priority ON TABLE announcements COLUMNS is_active, priority;
DEFINE INDEX IF NOT EXISTS admins_email ON TABLE admins COLUMNS email UNIQUE;
"#;

/// Database service - owns the SurrealDB connection
#[derive(Clone)]
pub struct DbService {
    pub db: Database,
}

impl DbService {
    /// Connect, sign in when credentials are configured, select namespace/database
    /// and apply the schema.
    pub async fn connect(config: &DatabaseConfig) -> RepoResult<Self> {
        let db = any::connect(config.url.as_str()).await?;

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        db.query(SCHEMA).await?.check()?;

        tracing::info!(
            target: "database",
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );

        Ok(Self { db })
    }

    /// In-memory store with the schema applied
    pub async fn memory() -> RepoResult<Self> {
        Self::connect(&DatabaseConfig::memory()).await
    }

    /// Round-trip probe used by the health endpoint
    pub async fn ping(&self) -> RepoResult<()> {
        self.db.query("RETURN true").await?.check()?;
        Ok(())
    }
}
