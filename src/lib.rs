//! TinyDev website: locale resolution, translation tables, navigation and
//! snippet view-state, HTML rendering and the HTTP server that ties them
//! together.

pub mod config;
pub mod error;
pub mod i18n;
pub mod nav;
pub mod query;
pub mod render;
pub mod server;
pub mod snippet;

pub use error::SiteError;
