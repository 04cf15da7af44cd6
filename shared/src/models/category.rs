//! Category Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_order, default_true, double_option};

pub const DEFAULT_PRIMARY_COLOR: &str = "#4A2C2A";
pub const DEFAULT_SECONDARY_COLOR: &str = "#C8A27C";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FAF6F1";

/// Decorative background pattern of a category card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePattern {
    #[default]
    None,
    Winter,
    Summer,
}

/// Display theme of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    #[serde(default)]
    pub pattern_style: ThemePattern,
}

impl Default for CategoryTheme {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            pattern_style: ThemePattern::None,
        }
    }
}

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name_ar: String,
    /// Icon glyph (usually an emoji)
    pub icon: Option<String>,
    pub image: Option<String>,
    pub theme: CategoryTheme,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name_ar: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub theme: CategoryTheme,
    #[serde(default = "default_order")]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Update category payload
///
/// Absent fields are left untouched; `null` clears `icon` and `image`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name_ar: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    pub theme: Option<CategoryTheme>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_defaults() {
        let payload: CategoryCreate =
            serde_json::from_str(r#"{"nameAr":"المشروبات"}"#).unwrap();
        assert_eq!(payload.order, 1);
        assert!(payload.is_active);
        assert_eq!(payload.theme, CategoryTheme::default());
    }

    #[test]
    fn update_payload_distinguishes_null_from_missing() {
        let payload: CategoryUpdate = serde_json::from_str(r#"{"image":null}"#).unwrap();
        assert_eq!(payload.image, Some(None));
        assert_eq!(payload.icon, None);

        let payload: CategoryUpdate = serde_json::from_str(r#"{"icon":"☕"}"#).unwrap();
        assert_eq!(payload.icon, Some(Some("☕".to_string())));
    }

    #[test]
    fn theme_pattern_wire_names() {
        let theme: CategoryTheme = serde_json::from_str(
            r##"{"primaryColor":"#111111","secondaryColor":"#222222","backgroundColor":"#333333","patternStyle":"winter"}"##,
        )
        .unwrap();
        assert_eq!(theme.pattern_style, ThemePattern::Winter);
    }
}
