//! Error types for the web application.
//!
//! Errors are rendered as small self-contained HTML pages. The error
//! path deliberately does not touch the template cache, so a cache or
//! render failure still produces a clean response.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use snipbox_store::StoreError;

use crate::templates::TemplateError;

/// Web application error type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The requested page or snippet does not exist. Malformed and
    /// expired snippet ids map here too, indistinguishably.
    #[error("not found")]
    NotFound,

    /// Invalid form input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Storage failure other than not-found.
    #[error("store error: {0}")]
    Store(StoreError),

    /// Template render failure.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

impl From<StoreError> for WebError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "The page you were looking for could not be found.".to_string(),
            ),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg.clone()),
            Self::Store(err) => {
                tracing::error!(error = %err, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Something went wrong. Please try again later.".to_string(),
                )
            }
            Self::Template(err) => {
                tracing::error!(error = %err, "template error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Something went wrong. Please try again later.".to_string(),
                )
            }
        };

        let html = error_page(title, &message);

        (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response()
    }
}

const ERROR_CSS: &str =
    "body{font-family:sans-serif;margin:4rem auto;max-width:32rem;text-align:center}a{color:#34495e}";

/// Build the minimal error page shown to clients. Titles and messages
/// are fixed strings or server-generated validation text; no request
/// data is echoed back.
fn error_page(title: &str, message: &str) -> String {
    format!(
        "<!doctype html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"><title>{title} - Snipbox</title>\
         <style>{ERROR_CSS}</style></head>\
         <body><main><h1>{title}</h1><p>{message}</p>\
         <a href=\"/\">Back to Snipbox</a></main></body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        assert_eq!(WebError::NotFound.to_string(), "not found");
    }

    #[test]
    fn bad_request_display() {
        let err = WebError::BadRequest("title must not be blank".to_string());
        assert_eq!(err.to_string(), "bad request: title must not be blank");
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: WebError = StoreError::NotFound.into();
        assert!(matches!(err, WebError::NotFound));
    }

    #[test]
    fn store_database_error_stays_a_store_error() {
        let err: WebError = StoreError::Database(sqlx_row_not_found()).into();
        assert!(matches!(err, WebError::Store(_)));
    }

    #[test]
    fn not_found_into_response() {
        let response = WebError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_into_response() {
        let response = WebError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_error_into_response_is_500() {
        let response = WebError::Store(StoreError::Database(sqlx_row_not_found())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn sqlx_row_not_found() -> sqlx::Error {
        sqlx::Error::RowNotFound
    }
}
