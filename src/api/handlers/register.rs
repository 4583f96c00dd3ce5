//! Handler for the registration endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
};

use crate::api::dto::register::RegisterRequest;
use crate::api::dto::user::UserItem;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "sallyTwo",
///   "password": "abc12345",
///   "favoriteClub": "Ogden Curling Club",
///   "newsLetter": false  // optional
/// }
/// ```
///
/// # Response
///
/// 201 Created with a `Location` header pointing at `/user/{id}` and the
/// stored record, including its generated `id`, as the body.
///
/// # Errors
///
/// Returns 400 (plain text) naming the first violated rule, or if the body
/// is not a JSON object of the expected shape.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<UserItem>), AppError> {
    let Json(payload) = payload?;

    let user = state.user_service.register(payload.into()).await?;
    let location = state.user_location(&user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserItem::from(user)),
    ))
}
