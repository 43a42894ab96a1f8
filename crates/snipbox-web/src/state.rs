//! Application state shared across all request handlers.

use std::sync::Arc;

use snipbox_store::SnippetStore;

use crate::config::Config;
use crate::templates::TemplateCache;

/// Shared application state available to all request handlers.
///
/// Cloned per request; everything inside is either a pool handle or
/// behind an `Arc`. The template cache is read-only after startup, so
/// no synchronization wraps it.
#[derive(Clone)]
pub struct AppState {
    /// Snippet store backed by the SQLite pool.
    pub store: SnippetStore,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Compiled page templates, keyed by page file name.
    pub templates: Arc<TemplateCache>,
}

impl AppState {
    /// Create a new application state from its already-initialized
    /// parts.
    pub fn new(config: Config, store: SnippetStore, templates: TemplateCache) -> Self {
        tracing::info!(
            pages = templates.len(),
            "application state initialized"
        );

        Self {
            store,
            config: Arc::new(config),
            templates: Arc::new(templates),
        }
    }
}
