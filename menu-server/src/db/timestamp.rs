//! Store-native timestamp conversion
//!
//! Records are written with SurrealDB `Datetime` values and every read path
//! turns them back into `chrono::DateTime<Utc>` through [`Normalize`], the
//! nested announcement display range included.

use chrono::{DateTime, Utc};
use surrealdb::sql::Datetime;

/// Conversion from a stored value into its language-native counterpart
pub trait Normalize {
    type Output;

    fn normalize(self) -> Self::Output;
}

impl Normalize for Datetime {
    type Output = DateTime<Utc>;

    fn normalize(self) -> DateTime<Utc> {
        self.0
    }
}

impl<T: Normalize> Normalize for Option<T> {
    type Output = Option<T::Output>;

    fn normalize(self) -> Self::Output {
        self.map(Normalize::normalize)
    }
}

/// Current time as a store-native value
pub fn now() -> Datetime {
    Datetime::from(Utc::now())
}

/// Store-native value of a language-native time
pub fn to_store(value: DateTime<Utc>) -> Datetime {
    Datetime::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn round_trips_through_store_type() {
        let t = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(to_store(t).normalize(), t);
    }

    #[test]
    fn option_is_normalized_in_place() {
        let t = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(Some(to_store(t)).normalize(), Some(t));
        assert_eq!(None::<Datetime>.normalize(), None);
    }
}
