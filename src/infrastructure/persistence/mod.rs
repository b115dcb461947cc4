//! Book repository implementations.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryBookRepository`] - `BTreeMap` behind an async lock, for tests and local runs

pub mod memory_book_repository;
pub mod pg_book_repository;

pub use memory_book_repository::InMemoryBookRepository;
pub use pg_book_repository::PgBookRepository;
