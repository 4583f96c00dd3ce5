//! # Club Registry
//!
//! A small user-registration service for curling club members, built with Axum.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, registration rules and the store trait
//! - **Application Layer** ([`application`]) - Service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory user store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/` | greeting |
//! | GET | `/user` | all users |
//! | DELETE | `/user/{id}` | 204, or 404 |
//! | POST | `/register` | 201 + `Location`, or 400 |
//! | GET | `/book/{id}` | 501, reserved |
//!
//! ## Quick Start
//!
//! ```bash
//! export APP_ENV=development
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.
//!
//! Users live in memory only; restarting the process resets the store to its
//! two seed members. Passwords are stored and returned in plain text.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::config::RuntimeMode;
    pub use crate::domain::entities::{Club, NewUser, RegistrationDraft, User};
    pub use crate::domain::repositories::UserRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryUserRepository;
    pub use crate::state::AppState;
}
