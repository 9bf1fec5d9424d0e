use anyhow::Result;
use tinydev_site::{config::Config, i18n::TranslationValidator, server};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tinydev_site=info".parse()?),
        )
        .init();

    info!("Starting TinyDev site");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Default language: {}", config.default_language.name());

    // Report table drift at startup; the site still serves
    for (language, report) in TranslationValidator::validate_all() {
        for error in &report.errors {
            warn!("[{}] {}", language, error);
        }
        for warning in &report.warnings {
            warn!("[{}] {}", language, warning);
        }
    }

    server::serve(config).await
}
