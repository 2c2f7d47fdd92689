use chrono::{DateTime, Utc};

/// How a write touches a `published_at` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedAtChange {
    /// `COALESCE(published_at, now)`: the first publish wins.
    StampIfUnset(DateTime<Utc>),
    /// Overwrite with `now` regardless of the stored value.
    Stamp(DateTime<Utc>),
    Clear,
}

impl PublishedAtChange {
    /// Value the column holds after the change, given what it held before.
    pub fn apply_to(self, current: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        match self {
            PublishedAtChange::StampIfUnset(now) => current.or(Some(now)),
            PublishedAtChange::Stamp(now) => Some(now),
            PublishedAtChange::Clear => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_stamp_if_unset_keeps_first_timestamp() {
        let change = PublishedAtChange::StampIfUnset(at(12));
        assert_eq!(change.apply_to(Some(at(9))), Some(at(9)));
        assert_eq!(change.apply_to(None), Some(at(12)));
    }

    #[test]
    fn test_stamp_overwrites() {
        assert_eq!(PublishedAtChange::Stamp(at(12)).apply_to(Some(at(9))), Some(at(12)));
    }

    #[test]
    fn test_clear() {
        assert_eq!(PublishedAtChange::Clear.apply_to(Some(at(9))), None);
    }
}
