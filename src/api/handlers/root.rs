//! Handlers for the service root and reserved routes.

use axum::{extract::Path, http::StatusCode};

/// Greeting.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    "GET request received"
}

/// Reserved book route. Answers 501 without side effects.
///
/// # Endpoint
///
/// `GET /book/{book_id}`
pub async fn book_handler(Path(_book_id): Path<String>) -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
