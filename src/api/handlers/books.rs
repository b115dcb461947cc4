//! Handlers for book CRUD endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::book::{BookRequest, BookResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all books.
///
/// # Endpoint
///
/// `GET /api/books`
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = state.book_service.get_all_books().await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Returns a single book.
///
/// # Endpoint
///
/// `GET /api/books/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if the book does not exist.
pub async fn get_book_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Path(id) = path?;

    let book = state
        .book_service
        .get_book_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(id))?;

    Ok(Json(book.into()))
}

/// Creates a book. The store assigns the id.
///
/// # Endpoint
///
/// `POST /api/books`
///
/// # Request Body
///
/// ```json
/// { "title": "Dune", "author": "Herbert", "publicationYear": 1965 }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not a valid book.
pub async fn create_book_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let Json(payload) = payload?;

    let book = state.book_service.add_book(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Replaces title, author and publication year of a book.
///
/// # Endpoint
///
/// `PUT /api/books/{id}`
///
/// # Errors
///
/// Returns 400 if `id` or the body is malformed.
/// Returns 404 if the book does not exist.
pub async fn update_book_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let book = state.book_service.update_book(id, payload.into()).await?;

    Ok(Json(book.into()))
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /api/books/{id}`
///
/// Always answers 204 for a well-formed id, whether or not the book existed.
pub async fn delete_book_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;

    state.book_service.delete_book(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
