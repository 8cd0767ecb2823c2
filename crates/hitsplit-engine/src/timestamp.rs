use chrono::{DateTime, SecondsFormat, Utc};

/// Instant a visit started, from epoch seconds
pub fn visit_instant(start_secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(start_secs, 0)
}

/// Instant of a hit: `start_secs` plus `time_ms` milliseconds
pub fn hit_instant(start_secs: i64, time_ms: i64) -> Option<DateTime<Utc>> {
    start_secs
        .checked_mul(1000)?
        .checked_add(time_ms)
        .and_then(DateTime::from_timestamp_millis)
}

/// `2020-09-13T12:26:40Z`
pub fn format_visit(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `2020-09-13T12:26:40.000Z`
pub fn format_hit(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
