//! Locale resolution and the per-page translation context.

use crate::i18n::{Language, LanguageRegistry, TranslationTable};
use crate::query;
use tracing::debug;

/// Query argument that selects the page language (`?lang=es`).
pub const LANG_PARAM: &str = "lang";

/// Locale used when neither the URL nor the browser provide one.
pub const FALLBACK_LOCALE: &str = "en";

/// Work out the locale string for a page.
///
/// Precedence: the `lang` query argument, then the browser's reported locale,
/// then the legacy locale property some older browsers expose instead, then
/// `FALLBACK_LOCALE`. The result is not validated; `select_language` maps it
/// onto a supported language.
pub fn resolve_locale(
    url: &str,
    browser_locale: Option<&str>,
    legacy_locale: Option<&str>,
) -> String {
    query::find_param(url, LANG_PARAM).unwrap_or_else(|| {
        browser_locale
            .or(legacy_locale)
            .unwrap_or(FALLBACK_LOCALE)
            .to_string()
    })
}

/// Map any locale string onto a supported language.
///
/// A non-canonical language is chosen when its code occurs anywhere in the
/// string (case-sensitive, so `es-ES` and `es` pick Spanish while `ES` does
/// not). Everything else gets the canonical language.
pub fn select_language(locale: &str) -> Language {
    let registry = LanguageRegistry::get();

    registry
        .list_enabled()
        .into_iter()
        .filter(|config| !config.is_canonical)
        .find(|config| locale.contains(config.code))
        .and_then(|config| Language::from_code(config.code).ok())
        .unwrap_or_else(Language::canonical)
}

/// First language range of an `Accept-Language` header.
///
/// `"es-ES,es;q=0.9,en;q=0.8"` gives `Some("es-ES")`. Wildcards and empty
/// headers give `None`.
pub fn browser_locale_from_accept_language(header: &str) -> Option<String> {
    let first = header.split(',').next()?;
    let range = first.split(';').next()?.trim();

    if range.is_empty() || range == "*" {
        None
    } else {
        Some(range.to_string())
    }
}

/// Language and translation table for rendering one page.
///
/// Built once per request and passed explicitly to everything that needs
/// localized text.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    language: Language,
    strings: &'static TranslationTable,
}

impl PageContext {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            strings: language.strings(),
        }
    }

    /// Resolve the context for a page address and the browser's locales.
    pub fn from_request(
        url: &str,
        browser_locale: Option<&str>,
        legacy_locale: Option<&str>,
    ) -> Self {
        let locale = resolve_locale(url, browser_locale, legacy_locale);
        let language = select_language(&locale);
        debug!("Resolved locale '{}' to language '{}'", locale, language);
        Self::new(language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn strings(&self) -> &'static TranslationTable {
        self.strings
    }

    /// Text for `key` in the active language.
    ///
    /// Unknown keys produce an empty string.
    pub fn translate(&self, key: &str) -> &'static str {
        match self.strings.get(key) {
            Some(text) => text,
            None => {
                debug!("Missing translation key '{}' for '{}'", key, self.language);
                ""
            }
        }
    }

    pub fn try_translate(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key)
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::new(Language::canonical())
    }
}
