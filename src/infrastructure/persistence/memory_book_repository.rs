//! In-memory implementation of book repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

#[derive(Debug)]
struct Inner {
    books: BTreeMap<i64, Book>,
    next_id: i64,
}

/// Process-local book store.
///
/// Identifiers start at 1 and increase monotonically; a deleted id is never
/// handed out again. Contents are lost when the process exits.
///
/// # Use Cases
///
/// - Handler and service tests without PostgreSQL
/// - Local runs with `STORAGE_BACKEND=memory`
#[derive(Debug)]
pub struct InMemoryBookRepository {
    inner: RwLock<Inner>,
}

impl InMemoryBookRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory book store");
        Self {
            inner: RwLock::new(Inner {
                books: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.books.get(&id).cloned())
    }

    async fn save(&self, id: Option<i64>, book: NewBook) -> Result<Book, AppError> {
        let mut inner = self.inner.write().await;

        match id {
            None => {
                let id = inner.next_id;
                inner.next_id += 1;

                let saved = Book::new(id, book.title, book.author, book.publication_year);
                inner.books.insert(id, saved.clone());
                Ok(saved)
            }
            Some(id) => {
                let existing = inner
                    .books
                    .get_mut(&id)
                    .ok_or(AppError::NotFound { id })?;

                *existing = existing.clone().merge(book);
                Ok(existing.clone())
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner.books.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
