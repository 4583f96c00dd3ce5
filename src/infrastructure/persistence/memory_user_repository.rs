//! In-memory implementation of the user repository.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Club, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Process-lifetime user store backed by a `Vec`.
///
/// A single `RwLock` serializes writers, so concurrent registrations and
/// deletions cannot break id uniqueness or insertion order. Nothing is
/// persisted across restarts.
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Creates a store holding `users` in the given order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Creates a store holding the two startup members.
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Members present at startup.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "3c8da4d5-1597-46e7-baa1-e402aed70d80".to_string(),
            username: "sallyStudent".to_string(),
            password: "c00d1ng1sc00l".to_string(),
            favorite_club: Club::CacheValleyStoneSociety,
            news_letter: true,
        },
        User {
            id: "ce20079c-2326-4f17-8ac4-f617bfd28b7f".to_string(),
            username: "johnBlocton".to_string(),
            password: "veryg00dpassw0rd".to_string(),
            favorite_club: Club::SaltCityCurlingClub,
            news_letter: false,
        },
    ]
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let mut users = self.users.write().await;

        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn append(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.id == user.id) {
            return Err(AppError::internal(
                "Duplicate user id",
                json!({ "id": user.id }),
            ));
        }

        users.push(user);
        Ok(())
    }
}
