//! Generic collection over one record kind
//!
//! `list` / `get` / `create` / `update` / `delete` are the same for every
//! kind; a [`RecordKind`] supplies the table, the listing order and the
//! conversions between API payloads and stored records.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::sql::Datetime;

use super::{RepoError, RepoResult};
use crate::db::Database;
use crate::db::timestamp;

/// Whether a listing is restricted to active records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Customer-facing reads: `is_active == true` only
    Public,
    /// Admin reads: everything
    All,
}

/// Describes how one record kind is stored
pub trait RecordKind: Send + Sync + 'static {
    /// Table (collection) name
    const TABLE: &'static str;
    /// `ORDER BY` clause applied to every listing
    const ORDER_BY: &'static str;
    /// Name used in not-found messages
    const LABEL: &'static str;

    /// Stored shape
    type Record: Serialize + DeserializeOwned + Send + Sync + 'static;
    /// API shape, produced on every read
    type Model: From<Self::Record> + Send;
    type Create: Send;
    type Update: Send;
    /// Partial document merged on update
    type Patch: Serialize + Send + Sync + 'static;

    fn new_record(data: Self::Create, now: Datetime) -> Self::Record;

    fn to_patch(data: Self::Update, now: Datetime) -> Self::Patch;
}

/// CRUD over the table of `K`
pub struct Collection<K: RecordKind> {
    db: Database,
    _kind: PhantomData<K>,
}

impl<K: RecordKind> Clone for Collection<K> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: RecordKind> Collection<K> {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            _kind: PhantomData,
        }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// All records in the kind's order, active only on the public path
    pub async fn list(&self, visibility: Visibility) -> RepoResult<Vec<K::Model>> {
        let sql = match visibility {
            Visibility::Public => format!(
                "SELECT * FROM {} WHERE is_active = true ORDER BY {}",
                K::TABLE,
                K::ORDER_BY
            ),
            Visibility::All => format!("SELECT * FROM {} ORDER BY {}", K::TABLE, K::ORDER_BY),
        };
        let records: Vec<K::Record> = self.db.query(sql).await?.take(0)?;
        Ok(records.into_iter().map(K::Model::from).collect())
    }

    /// Single record, `None` when absent
    pub async fn get(&self, id: &str) -> RepoResult<Option<K::Model>> {
        let record: Option<K::Record> = self.db.select((K::TABLE, id)).await?;
        Ok(record.map(K::Model::from))
    }

    /// Insert a new record stamped with creation and update time
    pub async fn create(&self, data: K::Create) -> RepoResult<K::Model> {
        let record = K::new_record(data, timestamp::now());
        let created: Option<K::Record> = self.db.create(K::TABLE).content(record).await?;
        created
            .map(K::Model::from)
            .ok_or_else(|| RepoError::Database(format!("Failed to create {}", K::LABEL)))
    }

    /// Merge the given fields into an existing record, stamping update time only
    pub async fn update(&self, id: &str, data: K::Update) -> RepoResult<K::Model> {
        let existing: Option<K::Record> = self.db.select((K::TABLE, id)).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("{} {} not found", K::LABEL, id)));
        }

        let patch = K::to_patch(data, timestamp::now());
        let updated: Option<K::Record> = self.db.update((K::TABLE, id)).merge(patch).await?;
        updated
            .map(K::Model::from)
            .ok_or_else(|| RepoError::NotFound(format!("{} {} not found", K::LABEL, id)))
    }

    /// Hard delete. Returns whether a record was removed.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<K::Record> = self.db.delete((K::TABLE, id)).await?;
        Ok(deleted.is_some())
    }

    /// Number of records, active only on the public path
    pub async fn count(&self, visibility: Visibility) -> RepoResult<u64> {
        let sql = match visibility {
            Visibility::Public => format!(
                "SELECT count() AS count FROM {} WHERE is_active = true GROUP ALL",
                K::TABLE
            ),
            Visibility::All => format!("SELECT count() AS count FROM {} GROUP ALL", K::TABLE),
        };
        let count: Option<u64> = self.db.query(sql).await?.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }
}
