//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API
//! that composes validation with store mutation.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Registration, listing and removal of users

pub mod services;
