//! DTOs for book endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Book, NewBook};

/// Request body for `POST /api/books` and `PUT /api/books/{id}`.
///
/// All three fields are required. An `id` in the body is ignored; the
/// identifier always comes from the store or the request path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl From<BookRequest> for NewBook {
    fn from(req: BookRequest) -> Self {
        NewBook {
            title: req.title,
            author: req.author,
            publication_year: req.publication_year,
        }
    }
}

/// Book representation returned by every book endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl From<Book> for BookResponse {
    fn from(b: Book) -> Self {
        BookResponse {
            id: b.id,
            title: b.title,
            author: b.author,
            publication_year: b.publication_year,
        }
    }
}
