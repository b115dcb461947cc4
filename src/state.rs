//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::BookService;

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    /// Name of the active storage backend, reported by the health check.
    pub storage_backend: &'static str,
}

impl AppState {
    pub fn new(book_service: Arc<BookService>, storage_backend: &'static str) -> Self {
        Self {
            book_service,
            storage_backend,
        }
    }
}
