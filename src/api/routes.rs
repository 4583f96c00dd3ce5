//! API route configuration.

use crate::api::handlers::{
    book_handler, delete_user_handler, index_handler, list_users_handler, register_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All user registry routes.
///
/// # Endpoints
///
/// - `GET    /`                - Greeting
/// - `GET    /user`            - List users
/// - `DELETE /user/{user_id}`  - Remove a user
/// - `POST   /register`        - Register a user
/// - `GET    /book/{book_id}`  - Reserved (501)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/user", get(list_users_handler))
        .route("/user/{user_id}", delete(delete_user_handler))
        .route("/register", post(register_handler))
        .route("/book/{book_id}", get(book_handler))
}
