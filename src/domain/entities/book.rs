//! Book entity, the only record type managed by the service.

/// A persisted book record.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl Book {
    /// Creates a new Book instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let book = Book::new(1, "Dune".to_string(), "Herbert".to_string(), 1965);
    /// ```
    pub fn new(id: i64, title: String, author: String, publication_year: i32) -> Self {
        Self {
            id,
            title,
            author,
            publication_year,
        }
    }

    /// Overwrites every mutable field with the values from `data`.
    ///
    /// The identifier is kept from `self`.
    pub fn merge(self, data: NewBook) -> Self {
        Self {
            id: self.id,
            title: data.title,
            author: data.author,
            publication_year: data.publication_year,
        }
    }

    /// Splits off the mutable fields, dropping the identifier.
    pub fn into_fields(self) -> NewBook {
        NewBook {
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
        }
    }
}

/// The mutable field set of a book.
///
/// Used both as the insert payload and as the update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, publication_year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
        }
    }
}
