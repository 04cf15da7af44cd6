//! Stored record shapes
//!
//! What is actually written to SurrealDB: snake_case fields, `RecordId`
//! ids, native datetimes. Conversion to the API models in `shared::models`
//! happens in the repository layer through [`crate::db::timestamp`].

pub mod admin;
pub mod announcement;
pub mod category;
pub mod product;
pub mod site_settings;

pub use admin::{AdminRecord, AdminRow};
pub use announcement::{AnnouncementPatch, AnnouncementRecord, DisplayDatesRecord};
pub use category::{CategoryPatch, CategoryRecord};
pub use product::{ProductPatch, ProductRecord};
pub use site_settings::{SiteSettingsPatch, SiteSettingsRecord};

use surrealdb::RecordId;

/// Plain key of a record id (`categories:abc` -> `abc`)
pub fn record_key(id: &RecordId) -> String {
    id.key()
        .to_string()
        .trim_start_matches('⟨')
        .trim_end_matches('⟩')
        .trim_matches('`')
        .to_string()
}

/// Key of an optional id, empty when the record was never persisted
pub fn key_of(id: &Option<RecordId>) -> String {
    id.as_ref().map(record_key).unwrap_or_default()
}
