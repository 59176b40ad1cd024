//! Locale-aware date and time formatting backed by `icu_datetime`.
//!
//! Values are ISO-8601 strings (`2026-08-04` or `2026-08-04T09:30:00`).
//! Anything that cannot be parsed or formatted degrades to `Display` of the
//! raw value, never an error.

use std::str::FromStr;

use icu_calendar::Iso;
use icu_datetime::DateTimeFormatter;
use icu_datetime::fieldsets;
use icu_datetime::fieldsets::enums::{DateAndTimeFieldSet, DateFieldSet, TimeFieldSet};
use icu_datetime::input::DateTime;
use icu_datetime::options::Length;

use super::number::resolve_locale;
use crate::types::{DateFormat, StyleLength, Value};

/// Format an ISO-8601 date/time value for a locale chain.
pub(crate) fn format_datetime(locales: &[&str], value: &Value, format: &DateFormat) -> String {
    try_format(locales, value, format).unwrap_or_else(|| value.to_string())
}

fn try_format(locales: &[&str], value: &Value, format: &DateFormat) -> Option<String> {
    let datetime = parse_iso(value.as_string()?)?;
    let prefs = resolve_locale(locales);

    // With neither part requested, show a medium date.
    let date_length = format.date_length.or_else(|| {
        if format.time_length.is_none() {
            Some(StyleLength::Medium)
        } else {
            None
        }
    });

    match (date_length, format.time_length) {
        (Some(date_length), Some(time_length)) => {
            let ymd = fieldsets::YMD::for_length(to_length(date_length));
            let ymdt = match to_length(time_length) {
                Length::Short => ymd.with_time_hm(),
                _ => ymd.with_time_hms(),
            };
            let formatter = DateTimeFormatter::<DateAndTimeFieldSet>::try_new(
                prefs.into(),
                DateAndTimeFieldSet::YMDT(ymdt),
            )
            .ok()?;
            Some(formatter.format(&datetime).to_string())
        }
        (Some(date_length), None) => {
            let ymd = fieldsets::YMD::for_length(to_length(date_length));
            let formatter =
                DateTimeFormatter::<DateFieldSet>::try_new(prefs.into(), DateFieldSet::YMD(ymd))
                    .ok()?;
            Some(formatter.format(&datetime).to_string())
        }
        (None, Some(time_length)) => {
            let t = match to_length(time_length) {
                Length::Short => fieldsets::T::hm().with_length(Length::Short),
                length => fieldsets::T::hms().with_length(length),
            };
            let formatter =
                DateTimeFormatter::<TimeFieldSet>::try_new(prefs.into(), TimeFieldSet::T(t))
                    .ok()?;
            Some(formatter.format(&datetime).to_string())
        }
        (None, None) => None,
    }
}

/// Parse an ISO-8601 date or date-time string. A bare date is treated as
/// midnight so a single input type feeds every field set.
fn parse_iso(text: &str) -> Option<DateTime<Iso>> {
    if text.contains('T') {
        DateTime::from_str(text).ok()
    } else {
        DateTime::from_str(&format!("{text}T00:00:00")).ok()
    }
}

fn to_length(length: StyleLength) -> Length {
    match length {
        StyleLength::Short => Length::Short,
        StyleLength::Medium => Length::Medium,
        StyleLength::Long | StyleLength::Full => Length::Long,
    }
}
