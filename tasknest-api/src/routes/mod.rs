/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `resources`: Generic CRUD handlers shared by `/users` and `/todos`
///
/// plus the root greeting and the catch-all 404 handler.
use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

use crate::response;

pub mod health;
pub mod resources;

/// Root greeting
///
/// ```text
/// GET /
/// ```
pub async fn index() -> &'static str {
    "Hello World!"
}

/// Catch-all handler for unmatched routes
///
/// Answers with the failure envelope, carrying the requested path as the
/// payload so clients can see what they actually asked for.
pub async fn not_found(uri: Uri) -> Response {
    response::failure_with_path(StatusCode::NOT_FOUND, "Route not found", uri.path())
}
