//! Snippet query layer.
//!
//! All operations are point lookups or a single bounded listing over a
//! pooled SQLite connection. Expiry is enforced in the queries: an
//! expired snippet never leaves this module.

use std::str::FromStr;

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::error::{Result, StoreError};
use crate::model::Snippet;
use crate::schema;

/// Maximum number of snippets returned by [`SnippetStore::latest`].
pub const LATEST_LIMIT: i64 = 10;

/// Pool size for file-backed databases.
const MAX_CONNECTIONS: u32 = 5;

/// Handle to the snippet table, cheap to clone and share across
/// request handlers. The pool owns all connection synchronization.
#[derive(Clone, Debug)]
pub struct SnippetStore {
    pool: SqlitePool,
}

impl SnippetStore {
    /// Open a pooled connection to the database at `url` and apply
    /// pragmas and any pending schema migrations.
    ///
    /// Startup-fatal: the caller is expected to abort on error.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        schema::run(&pool).await?;

        tracing::info!(url = %url, "snippet store connected");

        Ok(Self { pool })
    }

    /// Open an in-memory database for testing.
    ///
    /// A single never-reaped connection: each SQLite in-memory database
    /// is private to its connection, so the pool must not open a second
    /// one or let the first expire.
    pub async fn connect_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        schema::run(&pool).await?;

        Ok(Self { pool })
    }

    /// Store a new snippet expiring `expires_days` from now and return
    /// its generated id.
    pub async fn insert(&self, title: &str, content: &str, expires_days: i64) -> Result<i64> {
        let created = Utc::now();
        let expires = created + Duration::days(expires_days);

        let result =
            sqlx::query("INSERT INTO snippets (title, content, created, expires) VALUES (?, ?, ?, ?)")
                .bind(title)
                .bind(content)
                .bind(created)
                .bind(expires)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch a single non-expired snippet by id.
    ///
    /// Returns [`StoreError::NotFound`] when the id does not exist or
    /// the snippet has expired.
    pub async fn get(&self, id: i64) -> Result<Snippet> {
        sqlx::query_as::<_, Snippet>(
            "SELECT id, title, content, created, expires \
             FROM snippets \
             WHERE id = ? AND expires > ?",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Fetch up to [`LATEST_LIMIT`] non-expired snippets, newest first.
    pub async fn latest(&self) -> Result<Vec<Snippet>> {
        let snippets = sqlx::query_as::<_, Snippet>(
            "SELECT id, title, content, created, expires \
             FROM snippets \
             WHERE expires > ? \
             ORDER BY created DESC, id DESC \
             LIMIT ?",
        )
        .bind(Utc::now())
        .bind(LATEST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(snippets)
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
