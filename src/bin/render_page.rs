//! Render the home page to stdout without starting the server.
//!
//! Usage:
//!   cargo run --bin render-page -- "https://site/?lang=es"
//!   cargo run --bin render-page -- "/" en-GB > index.html
//!
//! Arguments:
//! 1. Page address (defaults to "/"); `lang`, `section` and `open` are honoured
//! 2. Browser locale (optional)

use anyhow::Result;
use tinydev_site::i18n::PageContext;
use tinydev_site::nav::NavMenu;
use tinydev_site::query;
use tinydev_site::render::render_page;
use tinydev_site::snippet;
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tinydev_site=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let url = args.next().unwrap_or_else(|| "/".to_string());
    let browser_locale = args.next();

    let ctx = PageContext::from_request(&url, browser_locale.as_deref(), None);
    info!("Rendering '{}' in {}", url, ctx.language().name());

    let mut menu = NavMenu::default();
    if let Some(section) = query::find_param(&url, "section") {
        if let Err(e) = menu.select_id(&section) {
            warn!("Ignoring section: {}", e);
        }
    }

    let open = query::get_param(&url, "open", "");
    let (blocks, errors) =
        snippet::blocks_with_open(open.split(',').map(str::trim).filter(|id| !id.is_empty()));
    for e in errors {
        warn!("Ignoring snippet: {}", e);
    }

    print!("{}", render_page(&ctx, &menu, &blocks));
    Ok(())
}
