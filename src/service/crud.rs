//! Book CRUD against SQLite. Every statement is parameterized.

use crate::models::{Book, CreateBook, UpdateBook};
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "id, title, author, genre, is_available, edition, summary";

/// Store handle shared by all handlers. Cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct BookService {
    pool: SqlitePool,
}

impl BookService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert one row. Returns the id assigned by the store.
    pub async fn insert(&self, book: &CreateBook) -> Result<i64, sqlx::Error> {
        let sql = "INSERT INTO books (title, author, genre, is_available, edition, summary) VALUES (?, ?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, title = %book.title, "query");
        let result = sqlx::query(sql)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.genre)
            .bind(book.is_available)
            .bind(&book.edition)
            .bind(&book.summary)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list(&self) -> Result<Vec<Book>, sqlx::Error> {
        let sql = format!("SELECT {} FROM books ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await
    }

    pub async fn find(&self, id: i64) -> Result<Option<Book>, sqlx::Error> {
        let sql = format!("SELECT {} FROM books WHERE id = ?", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Overwrite title and author. Returns rows affected.
    pub async fn update(&self, id: i64, book: &UpdateBook) -> Result<u64, sqlx::Error> {
        let sql = "UPDATE books SET title = ?, author = ? WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(&book.title)
            .bind(&book.author)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns rows affected.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let sql = "DELETE FROM books WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect_in_memory, ensure_books_table};

    async fn service() -> BookService {
        let pool = connect_in_memory().await.unwrap();
        ensure_books_table(&pool).await.unwrap();
        BookService::new(pool)
    }

    fn new_book(title: &str, author: &str) -> CreateBook {
        CreateBook {
            title: title.into(),
            author: author.into(),
            genre: None,
            is_available: None,
            edition: None,
            summary: None,
        }
    }

    #[tokio::test]
    async fn insert_persists_optional_fields() {
        let svc = service().await;
        let mut book = new_book("Merlin", "Author Pendragon");
        book.genre = Some("fantasy".into());
        book.is_available = Some(true);
        book.summary = Some("A wizard".into());
        let id = svc.insert(&book).await.unwrap();

        let stored = svc.find(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.genre.as_deref(), Some("fantasy"));
        assert_eq!(stored.is_available, Some(true));
        assert_eq!(stored.summary.as_deref(), Some("A wizard"));
        assert!(stored.edition.is_none());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let svc = service().await;
        assert!(svc.list().await.unwrap().is_empty());
        let first = svc.insert(&new_book("Merlin", "Author Pendragon")).await.unwrap();
        let second = svc.insert(&new_book("Seeker", "Richard Cipher")).await.unwrap();
        let ids: Vec<i64> = svc.list().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn update_and_delete_report_rows_affected() {
        let svc = service().await;
        let id = svc.insert(&new_book("Old Title", "Old Author")).await.unwrap();
        let change = UpdateBook {
            title: "Updated Title".into(),
            author: "Updated Author".into(),
        };
        assert_eq!(svc.update(id, &change).await.unwrap(), 1);
        assert_eq!(svc.update(id + 100, &change).await.unwrap(), 0);
        assert_eq!(svc.find(id).await.unwrap().unwrap().title, "Updated Title");

        assert_eq!(svc.delete(id).await.unwrap(), 1);
        assert_eq!(svc.delete(id).await.unwrap(), 0);
        assert!(svc.find(id).await.unwrap().is_none());
    }
}
