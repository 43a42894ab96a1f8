//! The snippet row model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row from the `snippets` table.
///
/// Snippets are immutable after insertion; expiry is enforced at query
/// time rather than by deletion.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Snippet {
    /// Row id assigned by SQLite (always >= 1).
    pub id: i64,
    /// Short title shown in listings.
    pub title: String,
    /// Multi-line snippet body.
    pub content: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Expiry timestamp; always >= `created`.
    pub expires: DateTime<Utc>,
}
