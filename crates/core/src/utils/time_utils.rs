use chrono::{DateTime, Utc};

/// Converts on-chain unix seconds to a UTC instant.
///
/// This is the single source of truth for turning chain timestamps into
/// calendar time. Seconds outside chrono's representable range fall back to
/// the unix epoch rather than panicking.
pub fn datetime_from_unix(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap_or_default()
}

/// Converts a UTC instant back to unix seconds.
pub fn unix_from_datetime(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}
