//! Translation context for catalog-backed message lookup.
//!
//! The `I18n` struct is the user-facing entry point: it owns in-memory
//! message catalogs per locale, an active locale with an ordered fallback
//! chain, and resolves message ids to rendered strings. It is an explicitly
//! constructed, explicitly passed value; the crate has no global state.

use std::cell::RefCell;
use std::collections::HashMap;

use bon::Builder;

use crate::compiler::compile;
use crate::interpolate::{format_datetime, format_number, interpolate};
use crate::types::{CompiledMessage, DateFormat, Formats, NumberFormat, Value, Values};

/// Messages of one catalog, keyed by message id.
pub type Messages = HashMap<String, CompiledMessage>;

/// Translation context: per-locale catalogs plus an active locale.
///
/// Catalogs hold [`CompiledMessage`] values, so they can be shipped
/// precompiled (e.g. deserialized with serde) or compiled at load time from
/// pattern strings via [`I18n::load_patterns`].
///
/// # Example
///
/// ```
/// use icumsg::{I18n, values};
///
/// let mut i18n = I18n::builder().locale("en").build();
/// i18n.load_patterns("en", [("greeting", "Hello {name}!")]);
///
/// assert_eq!(
///     i18n.translate("greeting", &values! { "name" => "Joe" }, None),
///     "Hello Joe!"
/// );
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct I18n {
    /// Active locale tag (e.g. "en", "ru", "fr-CH").
    #[builder(default = "en".to_string())]
    locale: String,

    /// Ordered fallback chain used for number/date formatting and plural
    /// resolution. When empty, the active locale is used alone.
    #[builder(default)]
    fallback_locales: Vec<String>,

    /// Per-locale message catalogs.
    #[builder(skip)]
    catalogs: HashMap<String, Messages>,

    /// Cache of messages compiled from ids that had no catalog entry.
    ///
    /// Uses `RefCell` for interior mutability so `translate` can remain
    /// `&self`. Keyed by the id string and reused across calls.
    #[builder(skip)]
    missing_cache: RefCell<Messages>,
}

impl Default for I18n {
    fn default() -> Self {
        I18n::builder().build()
    }
}

impl I18n {
    /// Create a new context with default settings (English).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new context with the specified active locale.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        I18n::builder().locale(locale.into()).build()
    }

    // =========================================================================
    // Locale management
    // =========================================================================

    /// Get the active locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch the active locale.
    ///
    /// This does not load anything - the new locale's catalog must already
    /// have been supplied via [`I18n::load`] or [`I18n::load_patterns`].
    pub fn activate(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Get the fallback locale chain.
    pub fn fallback_locales(&self) -> &[String] {
        &self.fallback_locales
    }

    /// Replace the fallback locale chain.
    pub fn set_fallback_locales(&mut self, locales: Vec<String>) {
        self.fallback_locales = locales;
    }

    // =========================================================================
    // Catalog loading
    // =========================================================================

    /// Merge precompiled messages into the catalog for `locale`.
    ///
    /// Existing entries with the same id are replaced; other entries are
    /// kept. Returns the number of messages supplied.
    pub fn load(&mut self, locale: &str, messages: Messages) -> usize {
        let count = messages.len();
        self.catalogs
            .entry(locale.to_string())
            .or_default()
            .extend(messages);
        count
    }

    /// Compile pattern strings and merge them into the catalog for `locale`.
    ///
    /// Malformed patterns never fail the load; they are logged by the
    /// compiler and degrade to literal messages carrying the raw pattern.
    pub fn load_patterns<I, K, P>(&mut self, locale: &str, patterns: I) -> usize
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: AsRef<str>,
    {
        let catalog = self.catalogs.entry(locale.to_string()).or_default();
        let mut count = 0;
        for (id, pattern) in patterns {
            catalog.insert(id.into(), compile(pattern.as_ref()));
            count += 1;
        }
        count
    }

    /// Get the catalog for a specific locale (read-only).
    ///
    /// Returns None if no messages have been loaded for that locale.
    pub fn messages_for(&self, locale: &str) -> Option<&Messages> {
        self.catalogs.get(locale)
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Resolve `id` in the active locale's catalog and render it.
    ///
    /// An id with no catalog entry falls back to compiling the id string
    /// itself, so inline source patterns render even without a catalog.
    /// Compiled fallbacks are cached per id.
    pub fn translate(&self, id: &str, values: &Values, formats: Option<&Formats>) -> String {
        if let Some(message) = self
            .catalogs
            .get(&self.locale)
            .and_then(|messages| messages.get(id))
        {
            return interpolate(message, &self.locale, &self.fallback_locales)
                .format(values, formats);
        }

        let message = self.cached_compile(id);
        interpolate(&message, &self.locale, &self.fallback_locales).format(values, formats)
    }

    /// Format a number in the active locale.
    pub fn number(&self, value: impl Into<Value>, format: Option<&NumberFormat>) -> String {
        format_number(&self.locale_chain(), &value.into(), format)
    }

    /// Format an ISO-8601 date/time string in the active locale.
    pub fn date(&self, value: impl Into<Value>, format: &DateFormat) -> String {
        format_datetime(&self.locale_chain(), &value.into(), format)
    }

    /// Clear the cache of messages compiled from unknown ids.
    pub fn clear_missing_cache(&self) {
        self.missing_cache.borrow_mut().clear();
    }

    /// Return the number of cached fallback messages.
    pub fn missing_cache_len(&self) -> usize {
        self.missing_cache.borrow().len()
    }

    /// Look up or compile and cache a message for an unknown id.
    fn cached_compile(&self, pattern: &str) -> CompiledMessage {
        {
            let cache = self.missing_cache.borrow();
            if let Some(message) = cache.get(pattern) {
                return message.clone();
            }
        }
        let message = compile(pattern);
        self.missing_cache
            .borrow_mut()
            .insert(pattern.to_string(), message.clone());
        message
    }

    fn locale_chain(&self) -> Vec<&str> {
        if self.fallback_locales.is_empty() {
            vec![self.locale.as_str()]
        } else {
            self.fallback_locales.iter().map(String::as_str).collect()
        }
    }
}
