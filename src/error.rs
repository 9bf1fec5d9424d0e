use thiserror::Error;

/// Errors raised while building a page.
///
/// Most failures on the site are soft (defaults are used instead); these are
/// the cases where a caller asked for something that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// A menu or snippet element id that the page does not define
    #[error("element not found: '{0}'")]
    ElementNotFound(String),

    /// A language code that is not registered or not enabled
    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_message() {
        let err = SiteError::ElementNotFound("menu_blog".to_string());
        assert_eq!(err.to_string(), "element not found: 'menu_blog'");
    }

    #[test]
    fn test_unknown_language_message() {
        let err = SiteError::UnknownLanguage("fr".to_string());
        assert!(err.to_string().contains("fr"));
    }
}
