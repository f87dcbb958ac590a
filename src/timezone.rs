use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Resolve `canonical_timezone` to a UTC offset, falling back to UTC when
/// the name is not a known timezone.
pub fn local_offset_or_utc(canonical_timezone: &str) -> UtcOffset {
    get_local_offset(canonical_timezone).unwrap_or_else(|| {
        tracing::warn!("Unknown timezone \"{canonical_timezone}\", falling back to UTC");
        UtcOffset::UTC
    })
}
