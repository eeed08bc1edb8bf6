use chrono::{DateTime, Local, Utc};

/// Short numeric date in the viewer's local time zone, e.g. `6/1/2024`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}
