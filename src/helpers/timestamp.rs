use time::format_description::FormatItem;
use time::macros::format_description;
use time::error::Format;
use time::{OffsetDateTime, UtcOffset};

/// UTC, millisecond precision, `Z` suffix: `2024-07-01T09:30:00.000Z`.
const ISO_8601_MILLIS: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

pub fn format_iso_8601(moment: OffsetDateTime) -> Result<String, Format> {
    moment.to_offset(UtcOffset::UTC).format(ISO_8601_MILLIS)
}

pub fn now_iso_8601() -> Result<String, Format> {
    format_iso_8601(OffsetDateTime::now_utc())
}
