//! Translation table validation.
//!
//! Both tables are hand-maintained, so nothing stops one from gaining a key
//! the other lacks. The validator compares a translated table against the
//! canonical one: key sets must match, and every value should keep the same
//! links and markup tags as its canonical counterpart.

use crate::i18n::{Language, LanguageRegistry, TranslationTable};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Missing or extra keys
    pub errors: Vec<String>,

    /// Values whose links or markup differ from the reference
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
#[derive(Debug)]
pub struct TranslationValidator;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Compare `candidate` against `reference`.
    ///
    /// Errors are reported for keys present in only one table. For shared
    /// keys, warnings are reported when the URLs or the sequence of markup
    /// tags differ, or when the candidate value is empty.
    pub fn validate(reference: &TranslationTable, candidate: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference_keys: BTreeSet<_> = reference.keys().collect();
        let candidate_keys: BTreeSet<_> = candidate.keys().collect();

        for key in reference_keys.difference(&candidate_keys) {
            report.errors.push(format!(
                "Key '{}' is missing from '{}'",
                key, candidate.code
            ));
        }
        for key in candidate_keys.difference(&reference_keys) {
            report.errors.push(format!(
                "Key '{}' in '{}' is not defined in '{}'",
                key, candidate.code, reference.code
            ));
        }

        for key in reference_keys.intersection(&candidate_keys) {
            // Both lookups succeed: the key is in the intersection
            let (Some(original), Some(translated)) = (reference.get(key), candidate.get(key)) else {
                continue;
            };

            if translated.is_empty() {
                report
                    .warnings
                    .push(format!("Key '{}' is empty in '{}'", key, candidate.code));
            }

            let orig_urls = Self::extract_urls(original);
            let trans_urls = Self::extract_urls(translated);
            if orig_urls != trans_urls {
                report.warnings.push(format!(
                    "URL mismatch for '{}': '{}' has {:?}, '{}' has {:?}",
                    key, reference.code, orig_urls, candidate.code, trans_urls
                ));
            }

            let orig_tags = Self::extract_tags(original);
            let trans_tags = Self::extract_tags(translated);
            if orig_tags.len() != trans_tags.len() {
                report.warnings.push(format!(
                    "Markup mismatch for '{}': '{}' has {} tags, '{}' has {}",
                    key,
                    reference.code,
                    orig_tags.len(),
                    candidate.code,
                    trans_tags.len()
                ));
            }
        }

        report
    }

    /// Validate every enabled language against the canonical one.
    ///
    /// Returns one `(language, report)` pair per non-canonical language.
    pub fn validate_all() -> Vec<(Language, ValidationReport)> {
        let canonical = Language::canonical();

        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .filter(|config| !config.is_canonical)
            .filter_map(|config| Language::from_code(config.code).ok())
            .map(|language| {
                let report = Self::validate(canonical.strings(), language.strings());
                (language, report)
            })
            .collect()
    }

    /// Extract all URLs from a value
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r#"https?://[^\s'"<>]+"#).unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract tag names (`strong`, `/strong`, `br`, ...) from a value
    fn extract_tags(text: &str) -> Vec<String> {
        let regex = TAG_REGEX.get_or_init(|| Regex::new(r"<(/?[a-zA-Z]+)[^>]*>").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_lowercase()))
            .collect()
    }
}
