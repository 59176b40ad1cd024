//! CLDR plural category resolution.
//!
//! Different languages have different plural rules - English has "one" and
//! "other", while Russian has "one", "few", "many", and "other", and Arabic
//! uses all six categories. Cardinal rules classify quantities ("1 book");
//! ordinal rules classify ranks ("1st place").
//!
//! Plural rules are cached per thread per (locale, rule type) to avoid
//! re-creating `PluralRules` instances on every call. The cache is
//! initialized lazily on first access within each thread.

use std::cell::RefCell;
use std::str::FromStr;

use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by locale and rule type.
    static PLURAL_RULES_CACHE: RefCell<Vec<(CacheKey, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

type CacheKey = (String, bool);

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for a number under a locale chain.
///
/// The first tag in `locales` that parses as a locale is used. Returns one
/// of "zero", "one", "two", "few", "many", "other", or `None` when no tag in
/// the chain yields usable rule data. Callers must treat `None` as "no
/// match" rather than defaulting to "other".
///
/// # Examples
///
/// ```
/// use icumsg::plural_category;
///
/// // English: 1 = "one", everything else = "other"
/// assert_eq!(plural_category(&["en"], 1, false), Some("one"));
/// assert_eq!(plural_category(&["en"], 2, false), Some("other"));
///
/// // English ordinals: 1st, 2nd, 3rd, 4th
/// assert_eq!(plural_category(&["en"], 1, true), Some("one"));
/// assert_eq!(plural_category(&["en"], 3, true), Some("few"));
///
/// // Not a locale tag at all
/// assert_eq!(plural_category(&["not a tag!"], 1, false), None);
/// ```
pub fn plural_category(locales: &[&str], n: i64, ordinal: bool) -> Option<&'static str> {
    let locale = locales.iter().find_map(|tag| Locale::from_str(tag).ok())?;
    let key = (locale.to_string(), ordinal);

    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(k, _)| *k == key) {
            return Some(category_str(entry.1.category_for(n)));
        }
        let rule_type = if ordinal {
            PluralRuleType::Ordinal
        } else {
            PluralRuleType::Cardinal
        };
        let rules = PluralRules::try_new(locale.into(), rule_type.into()).ok()?;
        let category = category_str(rules.category_for(n));
        cache.push((key, rules));
        Some(category)
    })
}
