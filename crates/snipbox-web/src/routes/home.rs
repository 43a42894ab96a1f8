//! Home page - latest snippets.

use axum::extract::State;
use axum::response::Html;

use crate::error::WebError;
use crate::state::AppState;
use crate::templates::TemplateData;

/// `GET /`
///
/// Render the list of the most recent non-expired snippets.
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let snippets = state.store.latest().await?;

    let mut data = TemplateData::new();
    data.snippets = snippets;

    let html = state.templates.render("home.html", &data)?;
    Ok(Html(html))
}
