//! Integration tests for the translation context.

use std::collections::HashMap;

use icumsg::i18n::Messages;
use icumsg::{CompiledMessage, DateFormat, I18n, NumberFormat, StyleLength, compile, values};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_default_locale_is_english() {
    let i18n = I18n::new();
    assert_eq!(i18n.locale(), "en");
    assert!(i18n.fallback_locales().is_empty());
}

#[test]
fn test_builder() {
    let i18n = I18n::builder()
        .locale("ru")
        .fallback_locales(vec!["ru".to_string(), "en".to_string()])
        .build();
    assert_eq!(i18n.locale(), "ru");
    assert_eq!(i18n.fallback_locales(), ["ru", "en"]);
}

#[test]
fn test_with_locale() {
    let i18n = I18n::with_locale("fr");
    assert_eq!(i18n.locale(), "fr");
}

// =============================================================================
// Loading and lookup
// =============================================================================

#[test]
fn test_load_patterns_and_translate() {
    let mut i18n = I18n::new();
    let count = i18n.load_patterns(
        "en",
        [
            ("greeting", "Hello {name}!"),
            ("books", "{count, plural, one {# book} other {# books}}"),
        ],
    );
    assert_eq!(count, 2);

    assert_eq!(
        i18n.translate("greeting", &values! { "name" => "Joe" }, None),
        "Hello Joe!"
    );
    assert_eq!(
        i18n.translate("books", &values! { "count" => 2 }, None),
        "2 books"
    );
}

#[test]
fn test_activate_switches_catalog() {
    let mut i18n = I18n::new();
    i18n.load_patterns("en", [("greeting", "Hello!")]);
    i18n.load_patterns("ru", [("greeting", "Привет!")]);

    assert_eq!(i18n.translate("greeting", &values! {}, None), "Hello!");
    i18n.activate("ru");
    assert_eq!(i18n.translate("greeting", &values! {}, None), "Привет!");
}

#[test]
fn test_load_merges_catalogs() {
    let mut i18n = I18n::new();
    i18n.load_patterns("en", [("a", "first"), ("b", "second")]);
    i18n.load_patterns("en", [("b", "updated"), ("c", "third")]);

    assert_eq!(i18n.translate("a", &values! {}, None), "first");
    assert_eq!(i18n.translate("b", &values! {}, None), "updated");
    assert_eq!(i18n.translate("c", &values! {}, None), "third");
    assert_eq!(i18n.messages_for("en").map(HashMap::len), Some(3));
}

#[test]
fn test_load_precompiled_messages() {
    let messages: Messages = HashMap::from([
        ("plain".to_string(), CompiledMessage::from("Ready.")),
        (
            "books".to_string(),
            compile("{count, plural, one {# book} other {# books}}"),
        ),
    ]);

    let mut i18n = I18n::new();
    assert_eq!(i18n.load("en", messages), 2);
    assert_eq!(i18n.translate("plain", &values! {}, None), "Ready.");
    assert_eq!(
        i18n.translate("books", &values! { "count" => 1 }, None),
        "1 book"
    );
}

#[test]
fn test_load_serde_catalog() {
    // catalogs can ship precompiled as JSON and skip the parser entirely
    let json = serde_json::to_string(&compile("Hey {name}!")).unwrap();
    let message: CompiledMessage = serde_json::from_str(&json).unwrap();

    let mut i18n = I18n::new();
    i18n.load("en", HashMap::from([("hey".to_string(), message)]));
    assert_eq!(
        i18n.translate("hey", &values! { "name" => "Joe" }, None),
        "Hey Joe!"
    );
}

#[test]
fn test_malformed_pattern_still_loads() {
    let mut i18n = I18n::new();
    i18n.load_patterns("en", [("broken", "{count, plural, one {Message")]);
    assert_eq!(
        i18n.translate("broken", &values! { "count" => 1 }, None),
        "{count, plural, one {Message"
    );
}

// =============================================================================
// Missing ids
// =============================================================================

#[test]
fn test_missing_id_compiles_the_id_itself() {
    let i18n = I18n::new();
    assert_eq!(
        i18n.translate("Hello {name}!", &values! { "name" => "Joe" }, None),
        "Hello Joe!"
    );
}

#[test]
fn test_missing_id_fallback_is_cached() {
    let i18n = I18n::new();
    assert_eq!(i18n.missing_cache_len(), 0);

    i18n.translate("Hello {name}!", &values! { "name" => "a" }, None);
    assert_eq!(i18n.missing_cache_len(), 1);

    i18n.translate("Hello {name}!", &values! { "name" => "b" }, None);
    assert_eq!(i18n.missing_cache_len(), 1);

    i18n.clear_missing_cache();
    assert_eq!(i18n.missing_cache_len(), 0);
}

#[test]
fn test_catalog_entry_beats_id_fallback() {
    let mut i18n = I18n::new();
    i18n.load_patterns("en", [("Hello {name}!", "Hi {name}!")]);
    assert_eq!(
        i18n.translate("Hello {name}!", &values! { "name" => "Joe" }, None),
        "Hi Joe!"
    );
}

// =============================================================================
// Locale-dependent rendering
// =============================================================================

#[test]
fn test_translate_uses_active_locale_for_plurals() {
    let mut i18n = I18n::new();
    i18n.load_patterns(
        "ru",
        [("books", "{n, plural, one {# книга} few {# книги} many {# книг} other {# книги}}")],
    );
    i18n.activate("ru");

    assert_eq!(i18n.translate("books", &values! { "n" => 2 }, None), "2 книги");
    assert_eq!(i18n.translate("books", &values! { "n" => 5 }, None), "5 книг");
}

#[test]
fn test_fallback_locales_drive_formatting() {
    let mut i18n = I18n::builder().locale("fr").build();
    i18n.load_patterns("fr", [("amount", "{value, number}")]);
    assert_eq!(
        i18n.translate("amount", &values! { "value" => 0.1 }, None),
        "0,1"
    );

    i18n.set_fallback_locales(vec!["en".to_string()]);
    assert_eq!(
        i18n.translate("amount", &values! { "value" => 0.1 }, None),
        "0.1"
    );
}

// =============================================================================
// Convenience formatters
// =============================================================================

#[test]
fn test_number_convenience() {
    let i18n = I18n::new();
    assert_eq!(i18n.number(1234567, None), "1,234,567");

    let format = NumberFormat::builder().minimum_fraction_digits(2).build();
    assert_eq!(i18n.number(1, Some(&format)), "1.00");
}

#[test]
fn test_date_convenience() {
    let i18n = I18n::new();
    let format = DateFormat::builder().date_length(StyleLength::Medium).build();
    assert_eq!(i18n.date("2026-08-04", &format), "Aug 4, 2026");
}
