//! Error types for the snippet store.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while querying the snippet table.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No snippet matches the requested id, or it has expired.
    ///
    /// Expired snippets are indistinguishable from ones that never
    /// existed; both surface as this variant.
    #[error("no matching snippet")]
    NotFound,

    /// Any other storage failure (connectivity, constraint, decode).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = StoreError::NotFound;
        assert_eq!(err.to_string(), "no matching snippet");
    }

    #[test]
    fn database_display_includes_cause() {
        let err = StoreError::Database(sqlx::Error::RowNotFound);
        let msg = err.to_string();
        assert!(msg.starts_with("database error:"));
    }

    #[test]
    fn from_sqlx_error_is_database_kind() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database(_)));
    }
}
