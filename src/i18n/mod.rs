//! Internationalization (i18n) for the website.
//!
//! All language-related logic and the localized page text live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Validated `Language` type
//! - `strings`: The English and Spanish translation tables
//! - `locale`: Resolves the request's language and builds the `PageContext`
//! - `validator`: Checks that both tables stay in step
//!
//! # Example
//!
//! ```rust,ignore
//! use tinydev_site::i18n::PageContext;
//!
//! let ctx = PageContext::from_request("https://site/?lang=es-ES", None, None);
//! assert_eq!(ctx.translate("title_news"), "Novedades");
//! ```

mod language;
mod locale;
mod registry;
mod strings;
mod validator;

pub use language::Language;
pub use locale::{
    browser_locale_from_accept_language, resolve_locale, select_language, PageContext,
    FALLBACK_LOCALE, LANG_PARAM,
};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{TranslationTable, ENGLISH_STRINGS, SPANISH_STRINGS};
pub use validator::{TranslationValidator, ValidationReport};
