//! Formatter registry: named formatter dispatch and case selection.
//!
//! Dispatch is static with a guaranteed default arm. Unknown formatter keys
//! fall through to the identity formatter, so patterns written against
//! formatter kinds this registry does not implement degrade to the raw value
//! instead of failing the render.

use super::plural::plural_category;
use super::{datetime, number};
use crate::types::{
    CompiledMessage, DateFormat, FormatStyle, Formats, NumberFormat, NumberStyle, StyleLength,
    Value,
};

/// Apply the named formatter `key` to `value`.
///
/// `style` is resolved against the caller-supplied `formats` map first, then
/// interpreted as a built-in keyword. A style that resolves to nothing, or a
/// value the formatter cannot handle, degrades to `Display` of the value.
pub(crate) fn apply(
    key: &str,
    value: &Value,
    style: Option<&str>,
    locales: &[&str],
    formats: Option<&Formats>,
) -> String {
    match key {
        "number" => match number_style(style, formats) {
            Some(format) => number::format_number(locales, value, Some(&format)),
            None => value.to_string(),
        },
        "date" => match date_style(style, formats, false) {
            Some(format) => datetime::format_datetime(locales, value, &format),
            None => value.to_string(),
        },
        "time" => match date_style(style, formats, true) {
            Some(format) => datetime::format_datetime(locales, value, &format),
            None => value.to_string(),
        },
        // Identity fallback for formatter kinds not implemented here.
        _ => value.to_string(),
    }
}

/// Resolve a `number` style name to concrete options.
fn number_style(style: Option<&str>, formats: Option<&Formats>) -> Option<NumberFormat> {
    let Some(style) = style else {
        return Some(NumberFormat::default());
    };

    if let Some(FormatStyle::Number(format)) = formats.and_then(|f| f.get(style)) {
        return Some(format.clone());
    }

    if style == "decimal" {
        return Some(NumberFormat::default());
    }
    if style == "percent" {
        return Some(NumberFormat::builder().style(NumberStyle::Percent).build());
    }
    if let Some(code) = style.strip_prefix("currency:") {
        return Some(
            NumberFormat::builder()
                .style(NumberStyle::Currency)
                .currency(code)
                .build(),
        );
    }
    None
}

/// Resolve a `date`/`time` style name to concrete options.
fn date_style(style: Option<&str>, formats: Option<&Formats>, time: bool) -> Option<DateFormat> {
    let for_length = |length: StyleLength| {
        if time {
            DateFormat::builder().time_length(length).build()
        } else {
            DateFormat::builder().date_length(length).build()
        }
    };

    let Some(style) = style else {
        return Some(for_length(StyleLength::Medium));
    };

    if let Some(FormatStyle::Date(format)) = formats.and_then(|f| f.get(style)) {
        return Some(*format);
    }

    StyleLength::from_keyword(style).map(for_length)
}

/// Select the case body of a `select` block: exact key, else `other`.
///
/// An explicitly present empty case body is honored; only a missing key
/// falls back to `other`.
pub(crate) fn select_case<'a>(
    cases: &'a [(String, CompiledMessage)],
    value: &Value,
) -> Option<&'a CompiledMessage> {
    let key = value.to_string();
    find_case(cases, &key).or_else(|| find_case(cases, "other"))
}

/// Select the case body of a plural or selectordinal block.
///
/// Exact keys match the raw value and take precedence over category
/// resolution, which runs on the offset-adjusted value. Returns `None` when
/// the locale chain has no plural rule data, omitting the block entirely.
pub(crate) fn plural_case<'a>(
    cases: &'a [(String, CompiledMessage)],
    value: &Value,
    offset: i64,
    ordinal: bool,
    locales: &[&str],
) -> Option<&'a CompiledMessage> {
    if let Some(message) = find_case(cases, &value.to_string()) {
        return Some(message);
    }
    let adjusted = value.as_float()? - offset as f64;
    let category = plural_category(locales, adjusted.trunc() as i64, ordinal)?;
    find_case(cases, category).or_else(|| find_case(cases, "other"))
}

fn find_case<'a>(
    cases: &'a [(String, CompiledMessage)],
    key: &str,
) -> Option<&'a CompiledMessage> {
    cases.iter().find(|(k, _)| k == key).map(|(_, message)| message)
}
