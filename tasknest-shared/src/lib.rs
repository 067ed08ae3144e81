//! # TaskNest Shared Library
//!
//! This crate contains the data layer shared by the TaskNest API server:
//! connection pooling, schema bootstrap, entity models, and the generic
//! resource repository.
//!
//! ## Module Organization
//!
//! - `db`: PostgreSQL connection pool and schema bootstrap
//! - `models`: entity structs and request payloads
//! - `repository`: generic CRUD operations over any [`repository::Resource`]
//! - `error`: repository error taxonomy

pub mod db;
pub mod error;
pub mod models;
pub mod repository;

/// Current version of the TaskNest shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
