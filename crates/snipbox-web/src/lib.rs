//! Snipbox Web - server-rendered snippet pastebin.
//!
//! This crate provides the HTTP application: users create short text
//! snippets through a form and view them as HTML pages rendered from
//! disk-loaded templates.
//!
//! # Architecture
//!
//! - **Config**: environment-based configuration loaded once at startup
//! - **TemplateCache**: page templates composed (base, partials, page)
//!   and compiled at startup; immutable and shared across requests
//! - **AppState**: shared per-request state (store pool, config, cache)
//! - **Routes**: list view, detail view, create, health, static assets
//!
//! # Error handling
//!
//! Handlers return [`WebError`], which maps store and template failures
//! onto HTTP responses. Internal detail is logged inside the request
//! span and never echoed to the client.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::Config;
pub use error::WebError;
pub use routes::router;
pub use state::AppState;
pub use templates::{TemplateCache, TemplateData};
