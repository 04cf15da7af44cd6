//! Announcement Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_true, double_option};

/// Inclusive window during which an announcement may be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDates {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DisplayDates {
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }
}

/// Announcement entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title_ar: String,
    pub description_ar: Option<String>,
    pub image: Option<String>,
    /// Higher is shown first
    pub priority: i32,
    pub display_dates: Option<DisplayDates>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    /// Whether `now` falls inside the display window. No window means always.
    pub fn is_displayed_at(&self, now: DateTime<Utc>) -> bool {
        self.display_dates.is_none_or(|range| range.contains(now))
    }
}

/// Keep only announcements whose display window contains `now`, preserving order.
pub fn retain_displayed(announcements: Vec<Announcement>, now: DateTime<Utc>) -> Vec<Announcement> {
    announcements
        .into_iter()
        .filter(|a| a.is_displayed_at(now))
        .collect()
}

/// Create announcement payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementCreate {
    pub title_ar: String,
    pub description_ar: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub priority: i32,
    pub display_dates: Option<DisplayDates>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Update announcement payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementUpdate {
    pub title_ar: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description_ar: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    pub priority: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub display_dates: Option<Option<DisplayDates>>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn announcement(priority: i32, display_dates: Option<DisplayDates>) -> Announcement {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Announcement {
            id: format!("a{}", priority),
            title_ar: "عرض".to_string(),
            description_ar: None,
            image: None,
            priority,
            display_dates,
            is_active: true,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn no_window_is_always_displayed() {
        assert!(announcement(1, None).is_displayed_at(Utc::now()));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let end = start + Duration::days(7);
        let a = announcement(1, Some(DisplayDates { start, end }));

        assert!(a.is_displayed_at(start));
        assert!(a.is_displayed_at(end));
        assert!(!a.is_displayed_at(start - Duration::seconds(1)));
        assert!(!a.is_displayed_at(end + Duration::seconds(1)));
    }

    #[test]
    fn expired_high_priority_announcement_is_dropped() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let expired = DisplayDates {
            start: now - Duration::days(10),
            end: now - Duration::days(1),
        };
        let list = vec![announcement(10, Some(expired)), announcement(1, None)];

        let shown = retain_displayed(list, now);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].priority, 1);
    }

    #[test]
    fn display_dates_round_trip_as_rfc3339() {
        let json = r#"{"start":"2025-06-01T00:00:00Z","end":"2025-06-08T00:00:00Z"}"#;
        let range: DisplayDates = serde_json::from_str(json).unwrap();
        assert!(range.contains(Utc.with_ymd_and_hms(2025, 6, 4, 0, 0, 0).unwrap()));
    }
}
