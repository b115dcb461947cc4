//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Row shape of the `books` table.
#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    publication_year: i32,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book::new(r.id, r.title, r.author, r.publication_year)
    }
}

/// PostgreSQL repository for book storage.
///
/// Identifiers come from the `BIGSERIAL` sequence on `books.id`.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, publication_year
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, publication_year
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn save(&self, id: Option<i64>, book: NewBook) -> Result<Book, AppError> {
        let Some(id) = id else {
            let row = sqlx::query_as::<_, BookRow>(
                r#"
                INSERT INTO books (title, author, publication_year)
                VALUES ($1, $2, $3)
                RETURNING id, title, author, publication_year
                "#,
            )
            .bind(book.title)
            .bind(book.author)
            .bind(book.publication_year)
            .fetch_one(self.pool.as_ref())
            .await?;

            return Ok(row.into());
        };

        // A row deleted between the caller's read and this write stays deleted.
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title            = $2,
                author           = $3,
                publication_year = $4
            WHERE id = $1
            RETURNING id, title, author, publication_year
            "#,
        )
        .bind(id)
        .bind(book.title)
        .bind(book.author)
        .bind(book.publication_year)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Book::from).ok_or(AppError::NotFound { id })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
