//! Admin Repository

use shared::models::{Admin, AdminRole};

use super::{RepoError, RepoResult};
use crate::db::Database;
use crate::db::models::{AdminRecord, AdminRow};
use crate::db::timestamp;

const TABLE: &str = "admins";

#[derive(Clone)]
pub struct AdminRepository {
    db: Database,
}

impl AdminRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All admins, oldest first
    pub async fn list(&self) -> RepoResult<Vec<Admin>> {
        let rows: Vec<AdminRow> = self
            .db
            .query("SELECT * FROM admins ORDER BY created_at ASC")
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(Admin::from).collect())
    }

    /// Look up by principal id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Admin>> {
        let row: Option<AdminRow> = self.db.select((TABLE, id)).await?;
        Ok(row.map(Admin::from))
    }

    /// Look up by email, with the password hash (login path)
    pub async fn find_credentials(&self, email: &str) -> RepoResult<Option<(Admin, String)>> {
        let mut result = self
            .db
            .query("SELECT * FROM admins WHERE email = $email LIMIT 1")
            .bind(("email", normalize_email(email)))
            .await?;
        let rows: Vec<AdminRow> = result.take(0)?;
        Ok(rows.into_iter().next().map(|row| {
            let hash = row.password_hash.clone();
            (Admin::from(row), hash)
        }))
    }

    pub async fn create(&self, email: &str, password_hash: String, role: AdminRole) -> RepoResult<Admin> {
        let email = normalize_email(email);
        if self.find_credentials(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!("Admin '{}' already exists", email)));
        }

        let record = AdminRecord {
            email,
            password_hash,
            role,
            created_at: timestamp::now(),
        };
        let created: Option<AdminRow> = self.db.create(TABLE).content(record).await?;
        created
            .map(Admin::from)
            .ok_or_else(|| RepoError::Database("Failed to create admin".to_string()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<AdminRow> = self.db.delete((TABLE, id)).await?;
        Ok(deleted.is_some())
    }

    pub async fn count(&self) -> RepoResult<u64> {
        let count: Option<u64> = self
            .db
            .query("SELECT count() AS count FROM admins GROUP ALL")
            .await?
            .take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Whether the principal holds the super_admin role
    pub async fn is_super_admin(&self, id: &str) -> RepoResult<bool> {
        Ok(self
            .find_by_id(id)
            .await?
            .is_some_and(|admin| admin.is_super_admin()))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
