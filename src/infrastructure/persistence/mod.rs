//! Repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryUserRepository`] - Process-lifetime user store

pub mod memory_user_repository;

pub use memory_user_repository::{MemoryUserRepository, seed_users};
