//! Handlers for user collection endpoints (list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::user::UserItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered user in insertion order.
///
/// # Endpoint
///
/// `GET /user`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": "3c8da4d5-1597-46e7-baa1-e402aed70d80",
///     "username": "sallyStudent",
///     "password": "c00d1ng1sc00l",
///     "favoriteClub": "Cache Valley Stone Society",
///     "newsLetter": true
///   }
/// ]
/// ```
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserItem::from).collect()))
}

/// Removes a user.
///
/// # Endpoint
///
/// `DELETE /user/{user_id}`
///
/// Returns 204 with an empty body.
///
/// # Errors
///
/// Returns 404 (plain text) if no user has this id.
pub async fn delete_user_handler(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
