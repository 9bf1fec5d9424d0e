//! Language type: validated language representation.

use crate::error::SiteError;
use crate::i18n::{LanguageConfig, LanguageRegistry, TranslationTable};
use crate::i18n::{ENGLISH_STRINGS, SPANISH_STRINGS};
use serde::{Serialize, Serializer};
use std::fmt;

/// A language that exists in the registry and is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err(SiteError::UnknownLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, SiteError> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .find(|config| config.code == code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| SiteError::UnknownLanguage(code.to_string()))
    }

    /// The language used when nothing selects another one.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// The translation table holding this language's page text.
    pub fn strings(&self) -> &'static TranslationTable {
        match self.code {
            "es" => &SPANISH_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Language::ENGLISH.code(), "en");
        assert_eq!(Language::ENGLISH.name(), "English");
        assert!(Language::ENGLISH.is_canonical());

        assert_eq!(Language::SPANISH.code(), "es");
        assert_eq!(Language::SPANISH.native_name(), "Español");
        assert!(!Language::SPANISH.is_canonical());
    }

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
        assert_eq!(Language::from_code("es").unwrap(), Language::SPANISH);
    }

    #[test]
    fn test_from_code_accepts_every_enabled_language() {
        for config in LanguageRegistry::get().list_enabled() {
            assert_eq!(Language::from_code(config.code).unwrap().code(), config.code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        assert_eq!(
            Language::from_code("fr"),
            Err(SiteError::UnknownLanguage("fr".to_string()))
        );
        assert!(Language::from_code("").is_err());
        // Codes are exact, not locale tags
        assert!(Language::from_code("es-ES").is_err());
    }

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    #[test]
    fn test_strings_match_language() {
        assert_eq!(Language::ENGLISH.strings().get("title_news"), Some("News"));
        assert_eq!(Language::SPANISH.strings().get("title_news"), Some("Novedades"));
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(Language::SPANISH.to_string(), "es");
        assert_eq!(
            serde_json::to_string(&Language::ENGLISH).unwrap(),
            "\"en\""
        );
    }
}
