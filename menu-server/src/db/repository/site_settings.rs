//! Site Settings Repository (singleton `settings:site_settings`)

use shared::models::{SiteSettings, SiteSettingsUpdate};

use super::RepoResult;
use crate::db::Database;
use crate::db::models::{SiteSettingsPatch, SiteSettingsRecord};
use crate::db::timestamp;

const TABLE: &str = "settings";
const SINGLETON: &str = "site_settings";

#[derive(Clone)]
pub struct SiteSettingsRepository {
    db: Database,
}

impl SiteSettingsRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Stored settings, `None` until first saved
    pub async fn find(&self) -> RepoResult<Option<SiteSettings>> {
        let record: Option<SiteSettingsRecord> = self.db.select((TABLE, SINGLETON)).await?;
        Ok(record.map(SiteSettings::from))
    }

    /// Stored settings or the defaults
    pub async fn get(&self) -> RepoResult<SiteSettings> {
        Ok(self.find().await?.unwrap_or_default())
    }

    /// Merge into the singleton, creating it from the defaults on first save
    pub async fn upsert(&self, data: SiteSettingsUpdate) -> RepoResult<SiteSettings> {
        if self.find().await?.is_none() {
            let defaults = SiteSettings::default();
            let seed = SiteSettingsRecord {
                id: None,
                site_name_ar: defaults.site_name_ar,
                logo: None,
                social_media: defaults.social_media,
                updated_at: Some(timestamp::now()),
            };
            let _: Option<SiteSettingsRecord> =
                self.db.upsert((TABLE, SINGLETON)).content(seed).await?;
        }

        let patch = SiteSettingsPatch::new(data, timestamp::now());
        let updated: Option<SiteSettingsRecord> =
            self.db.update((TABLE, SINGLETON)).merge(patch).await?;
        Ok(updated.map(SiteSettings::from).unwrap_or_default())
    }
}
