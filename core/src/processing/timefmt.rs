use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Whether every specifier in `format` is one chrono understands.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Renders epoch seconds in `tz` with a strftime-style `format`.
///
/// Epochs chrono cannot represent, and formats it cannot render, fall back to
/// the raw number so neither aborts a run.
pub fn format_epoch<Tz>(epoch: i64, format: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(utc) = DateTime::from_timestamp(epoch, 0) else {
        return epoch.to_string();
    };
    let mut text = String::new();
    match write!(text, "{}", utc.with_timezone(tz).format(format)) {
        Ok(()) => text,
        Err(_) => epoch.to_string(),
    }
}
