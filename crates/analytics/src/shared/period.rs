//! Calendar periods used as chart buckets.
//!
//! All grouping happens in UTC so the same input gives the same buckets on
//! every machine. Localized display of the labels is the UI's business.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use contracts::enums::Bucketing;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a transaction timestamp.
///
/// Accepted forms: RFC 3339 with any offset, a naive date-time (read as UTC)
/// and a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_occurred_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Bucket a timestamp falls into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketPeriod {
    /// First day of the period, the sort key of the bucket
    pub start: NaiveDate,
    /// Label shown on the chart axis
    pub key: String,
}

impl BucketPeriod {
    pub fn of(instant: DateTime<Utc>, bucketing: Bucketing) -> Self {
        let date = instant.date_naive();
        match bucketing {
            Bucketing::Daily => Self {
                start: date,
                key: date.format("%Y-%m-%d").to_string(),
            },
            Bucketing::Weekly => {
                let week = date.iso_week();
                let offset = i64::from(date.weekday().num_days_from_monday());
                Self {
                    start: date - Duration::days(offset),
                    key: format!("{}-W{:02}", week.year(), week.week()),
                }
            }
            Bucketing::Monthly => {
                let start = date.with_day(1).unwrap_or(date);
                Self {
                    start,
                    key: start.format("%b %y").to_string(),
                }
            }
        }
    }
}
