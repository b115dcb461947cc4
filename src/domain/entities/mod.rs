//! Core domain entities.
//!
//! - [`Book`] - a persisted book with its store-assigned id
//! - [`NewBook`] - the mutable field set, used for inserts and updates

pub mod book;

pub use book::{Book, NewBook};
