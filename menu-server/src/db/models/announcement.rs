//! Announcement record

use serde::{Deserialize, Serialize};
use shared::models::{Announcement, AnnouncementCreate, AnnouncementUpdate, DisplayDates};
use surrealdb::RecordId;
use surrealdb::sql::Datetime;

use super::key_of;
use crate::db::timestamp::{Normalize, to_store};

/// Display range with store-native bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayDatesRecord {
    pub start: Datetime,
    pub end: Datetime,
}

impl From<DisplayDates> for DisplayDatesRecord {
    fn from(d: DisplayDates) -> Self {
        Self {
            start: to_store(d.start),
            end: to_store(d.end),
        }
    }
}

impl Normalize for DisplayDatesRecord {
    type Output = DisplayDates;

    fn normalize(self) -> DisplayDates {
        DisplayDates {
            start: self.start.normalize(),
            end: self.end.normalize(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title_ar: String,
    pub description_ar: Option<String>,
    pub image: Option<String>,
    pub priority: i32,
    pub display_dates: Option<DisplayDatesRecord>,
    pub is_active: bool,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

impl AnnouncementRecord {
    pub fn new(data: AnnouncementCreate, now: Datetime) -> Self {
        Self {
            id: None,
            title_ar: data.title_ar.trim().to_string(),
            description_ar: data.description_ar,
            image: data.image,
            priority: data.priority,
            display_dates: data.display_dates.map(DisplayDatesRecord::from),
            is_active: data.is_active,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl From<AnnouncementRecord> for Announcement {
    fn from(r: AnnouncementRecord) -> Self {
        Self {
            id: key_of(&r.id),
            title_ar: r.title_ar,
            description_ar: r.description_ar,
            image: r.image,
            priority: r.priority,
            display_dates: r.display_dates.normalize(),
            is_active: r.is_active,
            created_at: r.created_at.normalize(),
            updated_at: r.updated_at.normalize(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_dates: Option<Option<DisplayDatesRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub updated_at: Datetime,
}

impl AnnouncementPatch {
    pub fn new(data: AnnouncementUpdate, now: Datetime) -> Self {
        Self {
            title_ar: data.title_ar.map(|t| t.trim().to_string()),
            description_ar: data.description_ar,
            image: data.image,
            priority: data.priority,
            display_dates: data.display_dates.map(|d| d.map(DisplayDatesRecord::from)),
            is_active: data.is_active,
            updated_at: now,
        }
    }
}
