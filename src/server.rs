use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::i18n::{browser_locale_from_accept_language, Language, PageContext};
use crate::nav::NavMenu;
use crate::render::render_page;
use crate::query;
use crate::snippet;

/// Shared state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Query argument naming the highlighted menu entry
pub const SECTION_PARAM: &str = "section";

/// Query argument listing expanded snippets, comma-separated
pub const OPEN_PARAM: &str = "open";

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub language: Language,
    pub strings: BTreeMap<&'static str, &'static str>,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/translations", get(translations_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_address();
    let state = AppState {
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

/// Resolve the page context from the request address and browser locale
fn request_context(state: &AppState, uri: &Uri, headers: &HeaderMap) -> PageContext {
    let browser_locale = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(browser_locale_from_accept_language);

    PageContext::from_request(
        &uri.to_string(),
        browser_locale.as_deref(),
        Some(state.config.default_language.code()),
    )
}

async fn page_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&state, &uri, &headers);
    let url = uri.to_string();

    // Page arguments go through the same reader as `lang`: first occurrence
    // wins and nothing here can reject the request
    let mut menu = NavMenu::default();
    if let Some(section) = query::find_param(&url, SECTION_PARAM) {
        if let Err(e) = menu.select_id(&section) {
            warn!("Ignoring section: {}", e);
        }
    }

    let open = query::get_param(&url, OPEN_PARAM, "");
    let (blocks, errors) = snippet::blocks_with_open(
        open.split(',').map(str::trim).filter(|id| !id.is_empty()),
    );
    for e in errors {
        warn!("Ignoring snippet: {}", e);
    }

    let html = render_page(&ctx, &menu, &blocks);

    (
        [(header::CONTENT_LANGUAGE, ctx.language().code())],
        Html(html),
    )
        .into_response()
}

async fn translations_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Json<TranslationsResponse> {
    let ctx = request_context(&state, &uri, &headers);

    Json(TranslationsResponse {
        language: ctx.language(),
        strings: ctx.strings().entries().iter().copied().collect(),
    })
}

async fn health_handler() -> &'static str {
    "OK"
}
