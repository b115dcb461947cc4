//! API route configuration.

use crate::api::handlers::{
    create_book_handler, delete_book_handler, get_book_handler, list_books_handler,
    update_book_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Book CRUD routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /books`        - List all books
/// - `POST   /books`        - Create a book
/// - `GET    /books/{id}`   - Fetch one book
/// - `PUT    /books/{id}`   - Replace a book's mutable fields
/// - `DELETE /books/{id}`   - Delete a book (idempotent)
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/{id}",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
}
