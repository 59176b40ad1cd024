//! Locale-aware number formatting backed by `icu_decimal`.
//!
//! Formatters are cached per thread per (locale, grouping) pair; digit
//! padding and rounding are applied to the `Decimal` value itself before
//! formatting. Any failure degrades to the plain `Display` form of the
//! value, never an error.

use std::cell::RefCell;
use std::str::FromStr;

use fixed_decimal::{Decimal, FloatPrecision};
use icu_decimal::DecimalFormatter;
use icu_decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu_locale_core::{Locale, locale};

use crate::types::{NumberFormat, NumberStyle, Value};

thread_local! {
    /// Per-thread cache of `DecimalFormatter` keyed by locale and grouping.
    static FORMATTER_CACHE: RefCell<Vec<(CacheKey, DecimalFormatter)>> =
        const { RefCell::new(Vec::new()) };
}

type CacheKey = (String, bool);

/// Format a numeric value for a locale chain.
///
/// The first tag in `locales` that parses is used, falling back to English.
/// Non-numeric values and conversion failures degrade to `Display` of the
/// raw value.
pub(crate) fn format_number(
    locales: &[&str],
    value: &Value,
    format: Option<&NumberFormat>,
) -> String {
    let default_format;
    let format = match format {
        Some(format) => format,
        None => {
            default_format = NumberFormat::default();
            &default_format
        }
    };
    try_format(locales, value, format).unwrap_or_else(|| value.to_string())
}

fn try_format(locales: &[&str], value: &Value, format: &NumberFormat) -> Option<String> {
    let percent = format.style == NumberStyle::Percent;
    let mut decimal = match value {
        Value::Number(n) => {
            let n = if percent { n.checked_mul(100)? } else { *n };
            Decimal::from(n)
        }
        Value::Float(f) => {
            let f = if percent { f * 100.0 } else { *f };
            Decimal::try_from_f64(f, FloatPrecision::RoundTrip).ok()?
        }
        Value::String(_) => return None,
    };

    if let Some(min_frac) = format.minimum_fraction_digits {
        decimal.pad_end(-i16::from(min_frac));
    }

    // Percent output drops fractional digits unless the style asks for them.
    let max_frac = format
        .maximum_fraction_digits
        .or(if percent { Some(0) } else { None });
    if let Some(max_frac) = max_frac {
        let limit = -i16::from(max_frac);
        // Only round if the value currently extends beyond the limit.
        if *decimal.magnitude_range().start() < limit {
            decimal.round(limit);
        }
    }

    if let Some(min_int) = format.minimum_integer_digits {
        decimal.pad_start(i16::from(min_int));
    }

    let mut out = with_formatter(locales, format.use_grouping, |formatter| {
        formatter.format(&decimal).to_string()
    })?;

    match format.style {
        NumberStyle::Decimal => {}
        NumberStyle::Percent => out.push('%'),
        NumberStyle::Currency => {
            if let Some(code) = &format.currency {
                out.push(' ');
                out.push_str(code);
            }
        }
    }

    Some(out)
}

/// Run `f` with a cached formatter for the locale chain.
fn with_formatter<T>(
    locales: &[&str],
    use_grouping: bool,
    f: impl FnOnce(&DecimalFormatter) -> T,
) -> Option<T> {
    let loc = resolve_locale(locales);
    let key = (loc.to_string(), use_grouping);

    FORMATTER_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(k, _)| *k == key) {
            return Some(f(&entry.1));
        }
        let mut options = DecimalFormatterOptions::default();
        if !use_grouping {
            options.grouping_strategy = Some(GroupingStrategy::Never);
        }
        let formatter = DecimalFormatter::try_new(loc.into(), options).ok()?;
        let result = f(&formatter);
        cache.push((key, formatter));
        Some(result)
    })
}

/// The first parseable tag in the chain, or English as the last resort.
pub(crate) fn resolve_locale(locales: &[&str]) -> Locale {
    locales
        .iter()
        .find_map(|tag| Locale::from_str(tag).ok())
        .unwrap_or_else(|| locale!("en"))
}
