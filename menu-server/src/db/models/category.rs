//! Category record

use serde::{Deserialize, Serialize};
use shared::models::{Category, CategoryCreate, CategoryTheme, CategoryUpdate};
use surrealdb::RecordId;
use surrealdb::sql::Datetime;

use super::key_of;
use crate::db::timestamp::Normalize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name_ar: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub theme: CategoryTheme,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

impl CategoryRecord {
    pub fn new(data: CategoryCreate, now: Datetime) -> Self {
        Self {
            id: None,
            name_ar: data.name_ar.trim().to_string(),
            icon: data.icon,
            image: data.image,
            theme: data.theme,
            sort_order: data.order,
            is_active: data.is_active,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl From<CategoryRecord> for Category {
    fn from(r: CategoryRecord) -> Self {
        Self {
            id: key_of(&r.id),
            name_ar: r.name_ar,
            icon: r.icon,
            image: r.image,
            theme: r.theme,
            order: r.sort_order,
            is_active: r.is_active,
            created_at: r.created_at.normalize(),
            updated_at: r.updated_at.normalize(),
        }
    }
}

/// Partial update merged into a category record
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<CategoryTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub updated_at: Datetime,
}

impl CategoryPatch {
    pub fn new(data: CategoryUpdate, now: Datetime) -> Self {
        Self {
            name_ar: data.name_ar.map(|n| n.trim().to_string()),
            icon: data.icon,
            image: data.image,
            theme: data.theme,
            sort_order: data.order,
            is_active: data.is_active,
            updated_at: now,
        }
    }
}
