//! Route definitions for the web application.
//!
//! ## Routes
//!
//! - `GET /` - Latest snippets (HTML)
//! - `GET /snippet/view?id=N` - Single snippet (HTML)
//! - `POST /snippet/create` - Create a snippet, redirect to its page
//! - `GET /health` - Health check (JSON)
//! - `GET /static/*` - Static assets

mod health;
mod home;
mod snippet;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the complete application router.
///
/// `/snippet/create` is registered POST-only; axum answers any other
/// method with 405 and an `Allow: POST` header before the handler (and
/// therefore the store) is reached.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.ui_dir.join("static");

    Router::new()
        .route("/", get(home::home_page))
        .route("/snippet/view", get(snippet::snippet_view))
        .route("/snippet/create", post(snippet::snippet_create))
        .route("/health", get(health::health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
