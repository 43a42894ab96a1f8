//! Snippet detail and create handlers.

use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::error::WebError;
use crate::state::AppState;
use crate::templates::TemplateData;

/// Longest accepted title, in characters.
const MAX_TITLE_CHARS: usize = 100;

/// Accepted expiry range, in days.
const EXPIRES_DAYS: std::ops::RangeInclusive<i64> = 1..=365;

/// Query parameters for the detail view.
#[derive(Debug, Deserialize)]
pub struct ViewParams {
    /// Raw id value; parsed by hand so every malformed shape maps to
    /// the same not-found response.
    pub id: Option<String>,
}

/// `GET /snippet/view?id=N`
///
/// A missing, non-numeric, or non-positive id is indistinguishable
/// from an id that matches nothing: all of them are 404.
pub async fn snippet_view(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Html<String>, WebError> {
    let id = params
        .id
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|id| *id >= 1)
        .ok_or(WebError::NotFound)?;

    let snippet = state.store.get(id).await?;

    let mut data = TemplateData::new();
    data.snippet = Some(snippet);

    let html = state.templates.render("view.html", &data)?;
    Ok(Html(html))
}

/// Form fields for creating a snippet.
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    pub title: String,
    pub content: String,
    /// Expiry offset in days.
    pub expires: i64,
}

impl CreateForm {
    fn validate(&self) -> Result<(), WebError> {
        if self.title.trim().is_empty() {
            return Err(WebError::BadRequest("title must not be blank".to_string()));
        }
        if self.title.chars().count() > MAX_TITLE_CHARS {
            return Err(WebError::BadRequest(format!(
                "title must be {MAX_TITLE_CHARS} characters or fewer"
            )));
        }
        if self.content.trim().is_empty() {
            return Err(WebError::BadRequest(
                "content must not be blank".to_string(),
            ));
        }
        if !EXPIRES_DAYS.contains(&self.expires) {
            return Err(WebError::BadRequest(
                "expiry must be between 1 and 365 days".to_string(),
            ));
        }
        Ok(())
    }
}

/// `POST /snippet/create`
///
/// Validate the form, insert the snippet, and redirect to its detail
/// page. The route itself is POST-only; other methods never get here.
pub async fn snippet_create(
    State(state): State<AppState>,
    Form(form): Form<CreateForm>,
) -> Result<Redirect, WebError> {
    form.validate()?;

    let id = state
        .store
        .insert(form.title.trim(), &form.content, form.expires)
        .await?;

    tracing::info!(id, "snippet created");

    Ok(Redirect::to(&format!("/snippet/view?id={id}")))
}
