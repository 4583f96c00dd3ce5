//! User registration and management service.

use crate::domain::entities::{RegistrationDraft, User};
use crate::domain::registration;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Service for registering, listing and removing users.
///
/// Registration validates first and only then touches the store, so a
/// rejected request never mutates it.
pub struct UserService<R: UserRepository + ?Sized = dyn UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list_all().await
    }

    /// Validates a registration and stores the new user.
    ///
    /// The id is a fresh UUID v4; `news_letter` defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the first violated rule.
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn register(&self, draft: RegistrationDraft) -> Result<User, AppError> {
        let new_user = registration::validate(draft).inspect_err(|e| {
            tracing::debug!(reason = %e, "Registration rejected");
        })?;

        let user = User::new(Uuid::new_v4().to_string(), new_user);
        self.repository.append(user.clone()).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            club = %user.favorite_club,
            "User registered"
        );

        Ok(user)
    }

    /// Deletes a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::not_found("User not found"));
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Club;
    use crate::domain::repositories::MockUserRepository;
    use serde_json::json;

    fn create_test_user(id: &str, username: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            password: "abc12345".to_string(),
            favorite_club: Club::ParkCityCurlingClub,
            news_letter: false,
        }
    }

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            username: Some("sallyTwo".to_string()),
            password: Some("abc12345".to_string()),
            favorite_club: Some("Ogden Curling Club".to_string()),
            news_letter: None,
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_append()
            .withf(|user| {
                user.username == "sallyTwo"
                    && user.favorite_club == Club::OgdenCurlingClub
                    && !user.news_letter
                    && Uuid::parse_str(&user.id).is_ok()
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(mock_repo));

        let user = service.register(valid_draft()).await.unwrap();

        assert_eq!(user.username, "sallyTwo");
        assert!(!user.id.is_empty());
    }

    #[tokio::test]
    async fn test_register_generates_distinct_ids() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_append().times(2).returning(|_| Ok(()));

        let service = UserService::new(Arc::new(mock_repo));

        let first = service.register(valid_draft()).await.unwrap();
        let second = service.register(valid_draft()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_register_invalid_does_not_touch_store() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_append().times(0);

        let service = UserService::new(Arc::new(mock_repo));

        let mut draft = valid_draft();
        draft.favorite_club = Some("Unknown Club".to_string());

        let result = service.register(draft).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_store_failure() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_append()
            .times(1)
            .returning(|_| Err(AppError::internal("Store unavailable", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.register(valid_draft()).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        let users = vec![
            create_test_user("1", "firstUser"),
            create_test_user("2", "secondUser"),
        ];
        mock_repo
            .expect_list_all()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(mock_repo));

        let list = service.list_users().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "1");
        assert_eq!(list[1].id, "2");
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete_by_id()
            .withf(|id| id == "abc")
            .times(1)
            .returning(|_| Ok(true));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.delete_user("abc").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Ok(false));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.delete_user("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
