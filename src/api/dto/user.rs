//! DTO for user records returned by the API.

use serde::Serialize;

use crate::domain::entities::User;

/// JSON representation of a user.
///
/// The password is returned as stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub id: String,
    pub username: String,
    pub password: String,
    pub favorite_club: &'static str,
    pub news_letter: bool,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        UserItem {
            id: u.id,
            username: u.username,
            password: u.password,
            favorite_club: u.favorite_club.name(),
            news_letter: u.news_letter,
        }
    }
}
