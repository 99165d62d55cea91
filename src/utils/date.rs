//! Front-matter timestamp parsing and TOML datetime conversion.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Naive datetime layouts accepted after RFC 3339 fails.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a front-matter timestamp.
///
/// Accepts RFC 3339 (`2024-08-10T09:30:00+08:00`), naive datetimes
/// (`2024-08-10T09:30:00`, `2024-08-10 09:30:00`) and bare dates
/// (`2024-08-10`). Naive forms are taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    let utc = FixedOffset::east_opt(0)?;

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(naive.and_local_timezone(utc).single()?);
        }
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0)?.and_local_timezone(utc).single()
}

/// Replace every TOML datetime inside `value` with its RFC 3339 text.
pub fn stringify_toml_datetimes(value: &mut toml::Value) {
    match value {
        toml::Value::Datetime(dt) => {
            let text = dt.to_string();
            *value = toml::Value::String(text);
        }
        toml::Value::Array(items) => items.iter_mut().for_each(stringify_toml_datetimes),
        toml::Value::Table(table) => table
            .iter_mut()
            .for_each(|(_, item)| stringify_toml_datetimes(item)),
        _ => {}
    }
}
