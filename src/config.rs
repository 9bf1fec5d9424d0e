use anyhow::{Context, Result};
use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Locale used when neither the URL nor the browser name one
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = std::env::var("DEFAULT_LANGUAGE")
            .unwrap_or_else(|_| Language::canonical().code().to_string());

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            default_language: Language::from_code(&default_language)
                .with_context(|| format!("Invalid DEFAULT_LANGUAGE: '{}'", default_language))?,
        })
    }

    /// Socket address string for the listener (e.g. "0.0.0.0:8080")
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_language: Language::canonical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("DEFAULT_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_language, Language::ENGLISH);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("DEFAULT_LANGUAGE", "es");

        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.default_language, Language::SPANISH);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port_uses_default() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let config = Config::from_env().expect("should fall back");
        assert_eq!(config.port, 8080);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_language_fails() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "fr");
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("DEFAULT_LANGUAGE"));
        clear_env();
    }
}
