//! Admin record

use serde::{Deserialize, Serialize};
use shared::models::{Admin, AdminRole};
use surrealdb::RecordId;
use surrealdb::sql::Datetime;

use super::record_key;
use crate::db::timestamp::Normalize;

/// Admin as written to the store. The record key is the principal id.
#[derive(Debug, Clone, Serialize)]
pub struct AdminRecord {
    pub email: String,
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: Datetime,
}

/// Admin as read back
#[derive(Debug, Clone, Deserialize)]
pub struct AdminRow {
    pub id: RecordId,
    pub email: String,
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: Datetime,
}

impl From<AdminRow> for Admin {
    fn from(r: AdminRow) -> Self {
        Self {
            id: record_key(&r.id),
            email: r.email,
            role: r.role,
            created_at: r.created_at.normalize(),
        }
    }
}
