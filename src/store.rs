//! Pool construction and `books` table DDL.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool on `database_url` (e.g. `sqlite://library.db`), creating the file if missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(database_url, max_connections, "connected to store");
    Ok(pool)
}

/// Single-connection in-memory pool. The connection is never recycled, so data lives
/// as long as the pool does.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Create the `books` table if not exists. Safe to call on every startup.
pub async fn ensure_books_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            genre TEXT,
            is_available BOOLEAN,
            edition TEXT,
            summary TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_books_table_is_idempotent() {
        let pool = connect_in_memory().await.unwrap();
        ensure_books_table(&pool).await.unwrap();
        ensure_books_table(&pool).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn title_and_author_are_not_null() {
        let pool = connect_in_memory().await.unwrap();
        ensure_books_table(&pool).await.unwrap();
        let result = sqlx::query("INSERT INTO books (title) VALUES ('Orphan')")
            .execute(&pool)
            .await;
        assert!(result.is_err());
    }
}
