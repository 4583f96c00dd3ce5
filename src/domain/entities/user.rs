//! User entity and its creation inputs.

use super::club::Club;

/// A registered member.
///
/// Records are created by registration and removed by deletion; nothing
/// mutates them in between. The password is kept in plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub favorite_club: Club,
    pub news_letter: bool,
}

impl User {
    /// Creates a user from a validated [`NewUser`] and a freshly generated id.
    pub fn new(id: String, new_user: NewUser) -> Self {
        Self {
            id,
            username: new_user.username,
            password: new_user.password,
            favorite_club: new_user.favorite_club,
            news_letter: new_user.news_letter,
        }
    }
}

/// A registration that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub favorite_club: Club,
    pub news_letter: bool,
}

/// Untrusted registration input.
///
/// Any field may be absent. `news_letter` has already been coerced to a
/// boolean by the transport layer.
#[derive(Debug, Clone, Default)]
pub struct RegistrationDraft {
    pub username: Option<String>,
    pub password: Option<String>,
    pub favorite_club: Option<String>,
    pub news_letter: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_new_user() {
        let new_user = NewUser {
            username: "sallyTwo".to_string(),
            password: "abc12345".to_string(),
            favorite_club: Club::OgdenCurlingClub,
            news_letter: false,
        };

        let user = User::new("some-id".to_string(), new_user);

        assert_eq!(user.id, "some-id");
        assert_eq!(user.username, "sallyTwo");
        assert_eq!(user.password, "abc12345");
        assert_eq!(user.favorite_club, Club::OgdenCurlingClub);
        assert!(!user.news_letter);
    }

    #[test]
    fn test_draft_default_is_empty() {
        let draft = RegistrationDraft::default();

        assert!(draft.username.is_none());
        assert!(draft.password.is_none());
        assert!(draft.favorite_club.is_none());
        assert!(draft.news_letter.is_none());
    }
}
