//! Snipbox Store - snippet persistence over SQLite.
//!
//! This crate owns the snippet table and everything that touches it:
//! - The [`Snippet`] row model
//! - Schema bootstrap (versioned migration batches applied at pool open)
//! - The three query operations: insert, get, latest
//!
//! Callers receive a [`StoreError`] whose kinds distinguish "no such
//! snippet" from any other storage failure, so handlers can branch on
//! kind rather than message text.

mod error;
mod model;
mod schema;
mod store;

pub use error::{Result, StoreError};
pub use model::Snippet;
pub use store::{LATEST_LIMIT, SnippetStore};
