//! Repository trait for the user store.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Ordered collection of registered users.
///
/// Implementations keep insertion order and guarantee that every stored
/// `id` is unique. Records are appended already validated; the repository
/// does not re-check field rules.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn list_all(&self) -> Result<Vec<User>, AppError>;

    /// Removes the user with the given id, preserving the order of the rest.
    ///
    /// Returns `false` when no user matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store fails.
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;

    /// Appends a user to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the id is already taken or the
    /// backing store fails.
    async fn append(&self, user: User) -> Result<(), AppError>;
}
