//! Book management service.

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Service for reading and writing book records.
///
/// Each call is one independent pass against the store; nothing is cached
/// between calls. The only rule it adds on top of the repository is the
/// update merge (see [`BookService::update_book`]).
pub struct BookService<R: BookRepository + ?Sized = dyn BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository + ?Sized> BookService<R> {
    /// Creates a new book service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every stored book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on store errors.
    pub async fn get_all_books(&self) -> Result<Vec<Book>, AppError> {
        let books = self.repository.find_all().await?;
        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    /// Fetches a book by id. `Ok(None)` means the book does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on store errors.
    pub async fn get_book_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        debug!(id, "Fetching book");
        self.repository.find_by_id(id).await
    }

    /// Stores a new book and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on store errors.
    pub async fn add_book(&self, book: NewBook) -> Result<Book, AppError> {
        let created = self.repository.save(None, book).await?;
        info!(id = created.id, title = %created.title, "Book created");
        Ok(created)
    }

    /// Replaces the title, author and publication year of an existing book.
    ///
    /// The id always comes from the stored record. Nothing is written when the
    /// book does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no book has this id.
    /// Returns [`AppError::Database`] on store errors.
    pub async fn update_book(&self, id: i64, new_data: NewBook) -> Result<Book, AppError> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            warn!(id, "Update requested for missing book");
            return Err(AppError::not_found(id));
        };

        let merged = existing.merge(new_data);
        let updated = self
            .repository
            .save(Some(merged.id), merged.into_fields())
            .await?;

        info!(id = updated.id, "Book updated");
        Ok(updated)
    }

    /// Deletes a book. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on store errors.
    pub async fn delete_book(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await?;
        info!(id, "Book deleted");
        Ok(())
    }

    /// Reports whether the backing store is reachable.
    pub async fn is_store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBookRepository;
    use crate::infrastructure::persistence::InMemoryBookRepository;

    fn dune(id: i64) -> Book {
        Book::new(id, "Dune".to_string(), "Herbert".to_string(), 1965)
    }

    #[tokio::test]
    async fn test_get_all_books_delegates() {
        let mut mock_repo = MockBookRepository::new();

        let books = vec![dune(1), Book::new(2, "Emma".into(), "Austen".into(), 1815)];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(books.clone()));

        let service = BookService::new(Arc::new(mock_repo));

        let result = service.get_all_books().await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Dune");
    }

    #[tokio::test]
    async fn test_get_book_by_id_absent_is_not_error() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(mock_repo));

        let result = service.get_book_by_id(5).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_add_book_saves_without_id() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_save()
            .withf(|id, book| id.is_none() && book.title == "Dune")
            .times(1)
            .returning(|_, _| Ok(dune(1)));

        let service = BookService::new(Arc::new(mock_repo));

        let created = service
            .add_book(NewBook::new("Dune", "Herbert", 1965))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_update_book_merges_fields_and_keeps_id() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(dune(id))));

        mock_repo
            .expect_save()
            .withf(|id, book| {
                *id == Some(1)
                    && book.title == "Dune (rev)"
                    && book.author == "F. Herbert"
                    && book.publication_year == 1966
            })
            .times(1)
            .returning(|id, book| {
                Ok(Book::new(
                    id.unwrap_or_default(),
                    book.title,
                    book.author,
                    book.publication_year,
                ))
            });

        let service = BookService::new(Arc::new(mock_repo));

        let updated = service
            .update_book(1, NewBook::new("Dune (rev)", "F. Herbert", 1966))
            .await
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "Dune (rev)");
    }

    #[tokio::test]
    async fn test_update_book_not_found_does_not_write() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_save().never();

        let service = BookService::new(Arc::new(mock_repo));

        let result = service
            .update_book(9, NewBook::new("Ghost", "Nobody", 2000))
            .await;

        assert!(matches!(result, Err(AppError::NotFound { id: 9 })));
    }

    #[tokio::test]
    async fn test_update_book_propagates_store_error() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let service = BookService::new(Arc::new(mock_repo));

        let result = service
            .update_book(1, NewBook::new("Dune", "Herbert", 1965))
            .await;

        assert!(matches!(
            result,
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        ));
    }

    #[tokio::test]
    async fn test_delete_book_delegates() {
        let mut mock_repo = MockBookRepository::new();

        mock_repo
            .expect_delete_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(()));

        let service = BookService::new(Arc::new(mock_repo));

        assert!(service.delete_book(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_full_lifecycle_against_memory_store() {
        let repo: Arc<dyn BookRepository> = Arc::new(InMemoryBookRepository::new());
        let service: BookService = BookService::new(repo);

        let created = service
            .add_book(NewBook::new("Dune", "Herbert", 1965))
            .await
            .unwrap();
        assert_eq!(created, dune(1));
        assert_eq!(service.get_book_by_id(1).await.unwrap(), Some(created));

        let updated = service
            .update_book(1, NewBook::new("Dune (rev)", "Herbert", 1965))
            .await
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "Dune (rev)");

        service.delete_book(1).await.unwrap();
        assert!(service.get_book_by_id(1).await.unwrap().is_none());

        let result = service
            .update_book(1, NewBook::new("Dune", "Herbert", 1965))
            .await;
        assert!(matches!(result, Err(AppError::NotFound { id: 1 })));

        // Second delete of the same id is still fine.
        assert!(service.delete_book(1).await.is_ok());
    }
}
