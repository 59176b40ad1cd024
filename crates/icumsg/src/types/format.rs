//! Named format styles for number and date arguments.
//!
//! A pattern like `{amount, number, currency}` names a style; the caller
//! resolves `currency` by supplying a `Formats` map entry. Styles not found
//! in the map are interpreted as built-in keywords.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// A caller-supplied style for a formatted argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormatStyle {
    /// Options for the `number` formatter.
    Number(NumberFormat),
    /// Options for the `date` and `time` formatters.
    Date(DateFormat),
}

/// Locale-aware number formatting options.
///
/// # Example
///
/// ```
/// use icumsg::NumberFormat;
///
/// let format = NumberFormat::builder()
///     .style(icumsg::NumberStyle::Currency)
///     .currency("EUR")
///     .minimum_fraction_digits(2)
///     .build();
/// assert_eq!(format.currency.as_deref(), Some("EUR"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct NumberFormat {
    /// Presentation style. Defaults to plain decimal.
    #[builder(default)]
    pub style: NumberStyle,

    /// ISO 4217 currency code, used when `style` is [`NumberStyle::Currency`].
    pub currency: Option<String>,

    /// Whether to insert locale grouping separators.
    #[builder(default = true)]
    pub use_grouping: bool,

    /// Pad the integer part with leading zeroes to at least this many digits.
    pub minimum_integer_digits: Option<u8>,

    /// Pad the fractional part with trailing zeroes to at least this many digits.
    pub minimum_fraction_digits: Option<u8>,

    /// Round to at most this many fractional digits.
    pub maximum_fraction_digits: Option<u8>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::builder().build()
    }
}

/// Number presentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumberStyle {
    /// Plain decimal formatting.
    #[default]
    Decimal,
    /// Value scaled by 100 with a trailing percent sign.
    Percent,
    /// Decimal formatting with a currency code suffix.
    Currency,
}

/// Locale-aware date and time formatting options.
///
/// `date_length` alone formats the date part, `time_length` alone the time
/// part; with both set the output combines date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Builder)]
pub struct DateFormat {
    /// Length of the date part, if the date is shown.
    pub date_length: Option<StyleLength>,

    /// Length of the time part, if the time is shown.
    pub time_length: Option<StyleLength>,
}

/// A date or time length keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleLength {
    Short,
    Medium,
    Long,
    Full,
}

impl StyleLength {
    /// Parse a pattern style keyword. `default` maps to medium.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "short" => Some(StyleLength::Short),
            "medium" | "default" => Some(StyleLength::Medium),
            "long" => Some(StyleLength::Long),
            "full" => Some(StyleLength::Full),
            _ => None,
        }
    }
}
