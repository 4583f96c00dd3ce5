//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization with the camelCase field names
//! clients expect.

pub mod register;
pub mod user;
