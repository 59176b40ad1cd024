//! Token walk that renders a compiled message against runtime values.
//!
//! Interpolation is two-stage: [`interpolate`] binds a message to its locale
//! context once, and the returned [`Interpolation`] is invoked repeatedly
//! with different values. Missing values, unknown formatters, and
//! unresolvable plural categories all degrade locally; no call here fails.

use super::number::format_number;
use super::{escape, registry};
use crate::types::{
    CaseKind, CompiledMessage, FormatStyle, Formats, NumberFormat, Token, Value, Values,
};

/// Bind a compiled message to an active locale and fallback chain.
///
/// # Example
///
/// ```
/// use icumsg::{compile, interpolate, values};
///
/// let message = compile("{count, plural, one {# book} other {# books}}");
/// let bound = interpolate(&message, "en", &[]);
/// assert_eq!(bound.format(&values! { "count" => 1 }, None), "1 book");
/// assert_eq!(bound.format(&values! { "count" => 2 }, None), "2 books");
/// ```
pub fn interpolate<'a>(
    message: &'a CompiledMessage,
    locale: &'a str,
    fallback_locales: &'a [String],
) -> Interpolation<'a> {
    Interpolation {
        message,
        locale,
        fallback_locales,
    }
}

/// A compiled message bound to a locale context, ready to format values.
pub struct Interpolation<'a> {
    message: &'a CompiledMessage,
    locale: &'a str,
    fallback_locales: &'a [String],
}

impl Interpolation<'_> {
    /// Render the message with the given values and named format styles.
    pub fn format(&self, values: &Values, formats: Option<&Formats>) -> String {
        match self.message {
            // Literal messages skip the walk, trimming, and escape decoding.
            CompiledMessage::Literal(text) => text.clone(),
            CompiledMessage::Tokens(_) => {
                let locales = self.locale_chain();
                let scope = Scope {
                    locales: &locales,
                    values,
                    formats,
                };
                let mut out = String::new();
                walk(self.message, None, &scope, &mut out);

                let trimmed = out.trim();
                match escape::decode_escapes(trimmed) {
                    Some(decoded) => decoded,
                    None => trimmed.to_string(),
                }
            }
        }
    }

    /// The locale chain used for formatting and plural resolution: the
    /// fallback list when non-empty, else the active locale alone.
    fn locale_chain(&self) -> Vec<&str> {
        if self.fallback_locales.is_empty() {
            vec![self.locale]
        } else {
            self.fallback_locales.iter().map(String::as_str).collect()
        }
    }
}

/// Per-format-call context threaded through the token walk.
struct Scope<'a> {
    locales: &'a [&'a str],
    values: &'a Values,
    formats: Option<&'a Formats>,
}

/// Append the rendering of `message` to `out`.
///
/// `octothorpe` carries the substitution for `#` tokens while inside a
/// plural or selectordinal case body. It does not propagate into nested
/// select bodies, where `#` renders as literal text.
fn walk(message: &CompiledMessage, octothorpe: Option<&str>, scope: &Scope<'_>, out: &mut String) {
    let tokens = match message {
        CompiledMessage::Literal(text) => {
            out.push_str(text);
            return;
        }
        CompiledMessage::Tokens(tokens) => tokens,
    };

    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Octothorpe => match octothorpe {
                Some(number) => out.push_str(number),
                None => out.push('#'),
            },
            Token::Arg(name) => {
                if let Some(value) = scope.values.get(name) {
                    out.push_str(&value.to_string());
                }
            }
            Token::FormattedArg { name, key, style } => {
                if let Some(value) = scope.values.get(name) {
                    out.push_str(&registry::apply(
                        key,
                        value,
                        style.as_deref(),
                        scope.locales,
                        scope.formats,
                    ));
                }
            }
            Token::CaseBlock {
                name,
                kind,
                offset,
                cases,
            } => {
                if let Some(value) = scope.values.get(name) {
                    case_block(*kind, cases, value, *offset, scope, out);
                }
            }
        }
    }
}

/// Render one case block: select the case, then interpolate it with the
/// same outer values.
fn case_block(
    kind: CaseKind,
    cases: &[(String, CompiledMessage)],
    value: &Value,
    offset: i64,
    scope: &Scope<'_>,
    out: &mut String,
) {
    match kind {
        CaseKind::Select => {
            if let Some(selected) = registry::select_case(cases, value) {
                walk(selected, None, scope, out);
            }
        }
        CaseKind::Plural | CaseKind::SelectOrdinal => {
            let ordinal = kind == CaseKind::SelectOrdinal;
            let Some(selected) =
                registry::plural_case(cases, value, offset, ordinal, scope.locales)
            else {
                return;
            };
            let substitution = adjusted_value(value, offset).map(|adjusted| {
                format_number(scope.locales, &adjusted, octothorpe_format(scope.formats))
            });
            walk(selected, substitution.as_deref(), scope, out);
        }
    }
}

/// The raw value minus the case-block offset, keeping the numeric kind.
fn adjusted_value(value: &Value, offset: i64) -> Option<Value> {
    match value {
        Value::Number(n) => Some(Value::Number(n - offset)),
        Value::Float(f) => Some(Value::Float(f - offset as f64)),
        Value::String(_) => None,
    }
}

/// The `number` entry of the caller's formats, if any, applied to
/// octothorpe substitutions.
fn octothorpe_format(formats: Option<&Formats>) -> Option<&NumberFormat> {
    match formats?.get("number")? {
        FormatStyle::Number(format) => Some(format),
        FormatStyle::Date(_) => None,
    }
}
