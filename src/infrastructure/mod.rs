//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Book repository implementations (PostgreSQL, in-memory)

pub mod persistence;
