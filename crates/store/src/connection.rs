//! SQLite connection pooling and schema bootstrap.

use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

pub type DbPool = sqlx::SqlitePool;

/// Fail-fast window for acquiring a connection, in seconds.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Connect with default pool settings and bootstrap the schema.
pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    connect_with_settings(database_url, 5, DEFAULT_ACQUIRE_TIMEOUT_SECS).await
}

pub async fn connect_with_settings(
    database_url: &str,
    max_connections: u32,
    timeout_secs: u64,
) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(timeout_secs.max(1)))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA journal_mode = WAL").execute(&mut *conn).await?;
                sqlx::query("PRAGMA busy_timeout = 5000").execute(&mut *conn).await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await?;

    ensure_schema(&pool).await?;

    Ok(pool)
}

/// Idempotent schema bootstrap: one table of user documents with JSON
/// columns for the interaction lists and the remaining profile fields.
async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            phone TEXT PRIMARY KEY,
            viewed_items TEXT NOT NULL DEFAULT '[]',
            cart TEXT NOT NULL DEFAULT '[]',
            wishlist TEXT NOT NULL DEFAULT '[]',
            recommendations TEXT NOT NULL DEFAULT '[]',
            profile TEXT NOT NULL DEFAULT '{}'
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
