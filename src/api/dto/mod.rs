//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Book payloads use
//! camelCase field names (`publicationYear`).

pub mod book;
pub mod health;
