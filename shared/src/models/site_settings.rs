//! Site Settings Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::double_option;

/// Name shown when no settings record exists yet
pub const DEFAULT_SITE_NAME: &str = "فخم البن";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    /// Phone number in international format, linked as `https://wa.me/{number}`
    pub whatsapp: Option<String>,
}

/// Site settings (singleton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name_ar: String,
    pub logo: Option<String>,
    #[serde(default)]
    pub social_media: SocialMedia,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name_ar: DEFAULT_SITE_NAME.to_string(),
            logo: None,
            social_media: SocialMedia::default(),
            updated_at: None,
        }
    }
}

/// Update site settings payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsUpdate {
    pub site_name_ar: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo: Option<Option<String>>,
    pub social_media: Option<SocialMedia>,
}
