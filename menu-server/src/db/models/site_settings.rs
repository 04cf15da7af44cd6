//! Site settings singleton record

use serde::{Deserialize, Serialize};
use shared::models::{SiteSettings, SiteSettingsUpdate, SocialMedia};
use surrealdb::RecordId;
use surrealdb::sql::Datetime;

use crate::db::timestamp::Normalize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettingsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub site_name_ar: String,
    pub logo: Option<String>,
    #[serde(default)]
    pub social_media: SocialMedia,
    pub updated_at: Option<Datetime>,
}

impl From<SiteSettingsRecord> for SiteSettings {
    fn from(r: SiteSettingsRecord) -> Self {
        Self {
            site_name_ar: r.site_name_ar,
            logo: r.logo,
            social_media: r.social_media,
            updated_at: r.updated_at.normalize(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
    pub updated_at: Datetime,
}

impl SiteSettingsPatch {
    pub fn new(data: SiteSettingsUpdate, now: Datetime) -> Self {
        Self {
            site_name_ar: data.site_name_ar.map(|n| n.trim().to_string()),
            logo: data.logo,
            social_media: data.social_media,
            updated_at: now,
        }
    }
}
