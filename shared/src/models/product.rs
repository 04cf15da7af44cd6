//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{default_order, default_true, double_option, double_price_option, price_option};

/// Currency suffix used on every displayed price
pub const CURRENCY_AR: &str = "جنيه";

/// Size variant of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSize {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureOption {
    pub available: bool,
}

/// Hot/cold serving availability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    pub hot: TemperatureOption,
    pub cold: TemperatureOption,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptions {
    #[serde(default)]
    pub sizes: Vec<ProductSize>,
    pub temperature: Option<Temperature>,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name_ar: String,
    pub description_ar: Option<String>,
    /// Owning category. Not enforced; may point at a deleted category.
    pub category_id: String,
    pub image: Option<String>,
    #[serde(default, with = "price_option")]
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub options: ProductOptions,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Price text shown on the menu card
    pub fn price_label(&self) -> String {
        price_label(&self.options.sizes, self.base_price)
    }
}

/// Derive the displayed price.
///
/// With sizes, the range spans the *available* sizes only: `"10 جنيه"` when
/// min and max agree, `"10 - 15 جنيه"` otherwise. Without sizes (or when no
/// size is available) the flat base price is shown; a missing or zero base
/// price yields an empty label.
pub fn price_label(sizes: &[ProductSize], base_price: Option<Decimal>) -> String {
    let mut available = sizes.iter().filter(|s| s.is_available).map(|s| s.price);

    if let Some(first) = available.next() {
        let (min, max) = available.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        return if min == max {
            format!("{} {}", min.normalize(), CURRENCY_AR)
        } else {
            format!("{} - {} {}", min.normalize(), max.normalize(), CURRENCY_AR)
        };
    }

    match base_price {
        Some(price) if !price.is_zero() => format!("{} {}", price.normalize(), CURRENCY_AR),
        _ => String::new(),
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name_ar: String,
    pub description_ar: Option<String>,
    pub category_id: String,
    pub image: Option<String>,
    #[serde(default, with = "price_option")]
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub options: ProductOptions,
    #[serde(default = "default_order")]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Update product payload
///
/// Absent fields are left untouched; `null` clears the nullable ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name_ar: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description_ar: Option<Option<String>>,
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_price_option")]
    pub base_price: Option<Option<Decimal>>,
    pub options: Option<ProductOptions>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}
