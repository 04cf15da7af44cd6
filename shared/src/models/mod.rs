//! Data models
//!
//! Shared between menu-server and its clients (via API). Field names are
//! camelCase on the wire. IDs are the store's record keys as plain strings.

pub mod admin;
pub mod announcement;
pub mod category;
pub mod menu;
pub mod product;
pub mod site_settings;
pub mod stats;

// Re-exports
pub use admin::*;
pub use announcement::*;
pub use category::*;
pub use menu::*;
pub use product::*;
pub use site_settings::*;
pub use stats::*;

use serde::{Deserialize, Deserializer};

/// Distinguishes a missing field from an explicit `null` in update payloads.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// missing gives `None` (leave untouched), `null` gives `Some(None)` (clear),
/// a value gives `Some(Some(v))` (set).
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Optional price carried as a plain JSON number (`40`, `40.5`, `null`).
///
/// Use with `#[serde(default, with = "price_option")]`.
pub mod price_option {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.and_then(|d| d.to_f64()) {
            Some(price) => serializer.serialize_some(&price),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer)?
            .map(|price| {
                Decimal::from_f64(price)
                    .map(|d| d.normalize())
                    .ok_or_else(|| D::Error::custom(format!("invalid price: {}", price)))
            })
            .transpose()
    }
}

/// [`double_option`] for prices: missing, `null` and a JSON number are all accepted.
pub(crate) fn double_price_option<'de, D>(
    deserializer: D,
) -> Result<Option<Option<rust_decimal::Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    price_option::deserialize(deserializer).map(Some)
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_order() -> i32 {
    1
}
