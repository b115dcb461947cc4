//! Repository trait for book storage.

use crate::domain::entities::{Book, NewBook};
use crate::error::AppError;
use async_trait::async_trait;

/// Identifier-keyed storage of [`Book`] records with no business rules.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryBookRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_book.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Returns every stored book ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the store is unavailable.
    async fn find_all(&self) -> Result<Vec<Book>, AppError>;

    /// Finds a book by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Book))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the store is unavailable.
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Inserts or overwrites a book.
    ///
    /// - `id == None` - the store assigns a fresh identifier and inserts
    /// - `id == Some(x)` - all mutable fields of record `x` are overwritten
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is set but no such record exists.
    /// Returns [`AppError::Database`] if the store is unavailable.
    async fn save(&self, id: Option<i64>, book: NewBook) -> Result<Book, AppError>;

    /// Removes the book with the given identifier.
    ///
    /// Absent identifiers are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the store is unavailable.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Reports whether the underlying store answers requests.
    async fn health_check(&self) -> bool;
}
