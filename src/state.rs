//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::config::RuntimeMode;
use crate::domain::repositories::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub mode: RuntimeMode,
    /// Prefix for `Location` headers, without a trailing slash.
    pub public_base_url: Arc<str>,
}

impl AppState {
    /// Builds the state around an injected user store.
    pub fn new(
        repository: Arc<dyn UserRepository>,
        mode: RuntimeMode,
        public_base_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
            mode,
            public_base_url: public_base_url.into(),
        }
    }

    /// Address of a user resource.
    pub fn user_location(&self, id: &str) -> String {
        format!("{}/user/{}", self.public_base_url, id)
    }
}
