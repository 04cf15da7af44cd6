//! Product record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Product, ProductCreate, ProductOptions, ProductUpdate};
use surrealdb::RecordId;
use surrealdb::sql::Datetime;

use super::key_of;
use crate::db::timestamp::Normalize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name_ar: String,
    pub description_ar: Option<String>,
    /// Key of the owning category, not enforced
    pub category_id: String,
    pub image: Option<String>,
    #[serde(default, with = "shared::models::price_option")]
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub options: ProductOptions,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

impl ProductRecord {
    pub fn new(data: ProductCreate, now: Datetime) -> Self {
        Self {
            id: None,
            name_ar: data.name_ar.trim().to_string(),
            description_ar: data.description_ar,
            category_id: data.category_id,
            image: data.image,
            base_price: data.base_price,
            options: data.options,
            sort_order: data.order,
            is_active: data.is_active,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        Self {
            id: key_of(&r.id),
            name_ar: r.name_ar,
            description_ar: r.description_ar,
            category_id: r.category_id,
            image: r.image,
            base_price: r.base_price,
            options: r.options,
            order: r.sort_order,
            is_active: r.is_active,
            created_at: r.created_at.normalize(),
            updated_at: r.updated_at.normalize(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ProductOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub updated_at: Datetime,
}

impl ProductPatch {
    pub fn new(data: ProductUpdate, now: Datetime) -> Self {
        use rust_decimal::prelude::ToPrimitive;

        Self {
            name_ar: data.name_ar.map(|n| n.trim().to_string()),
            description_ar: data.description_ar,
            category_id: data.category_id,
            image: data.image,
            base_price: data.base_price.map(|p| p.and_then(|d| d.to_f64())),
            options: data.options,
            sort_order: data.order,
            is_active: data.is_active,
            updated_at: now,
        }
    }
}
