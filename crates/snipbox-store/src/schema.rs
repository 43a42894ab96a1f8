//! Database schema bootstrap.
//!
//! Uses a simple version table to track applied migration batches.
//! Batches must be appended in order and stay idempotent via
//! CREATE IF NOT EXISTS so a re-run against an existing database is a
//! no-op.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::Result;

/// Migration list: (version, SQL batch).
const MIGRATIONS: &[(i64, &str)] = &[(
    1,
    "CREATE TABLE IF NOT EXISTS snippets (
         id INTEGER PRIMARY KEY AUTOINCREMENT,
         title TEXT NOT NULL,
         content TEXT NOT NULL,
         created TEXT NOT NULL,
         expires TEXT NOT NULL
     );
     CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets (created);",
)];

/// Run any pending migration batches.
pub(crate) async fn run(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS _migrations (
             version INTEGER PRIMARY KEY,
             applied_at TEXT NOT NULL
         )",
    )
    .execute(pool)
    .await?;

    let current: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM _migrations")
        .fetch_one(pool)
        .await?;

    for &(version, sql) in MIGRATIONS {
        if version > current {
            sqlx::raw_sql(sql).execute(pool).await?;
            sqlx::query("INSERT INTO _migrations (version, applied_at) VALUES (?, ?)")
                .bind(version)
                .bind(Utc::now().to_rfc3339())
                .execute(pool)
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SnippetStore;

    #[tokio::test]
    async fn migrations_idempotent() {
        let store = SnippetStore::connect_in_memory().await.unwrap();
        run(store.pool()).await.unwrap();

        let has_snippets: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'snippets')",
        )
        .fetch_one(store.pool())
        .await
        .unwrap();

        assert!(has_snippets);
    }

    #[tokio::test]
    async fn migrations_version_tracking() {
        let store = SnippetStore::connect_in_memory().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _migrations")
            .fetch_one(store.pool())
            .await
            .unwrap();

        assert_eq!(count, MIGRATIONS.len() as i64);
    }
}
