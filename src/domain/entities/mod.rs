//! Core domain entities representing the registry's data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered member
//! - [`Club`] - The closed set of clubs a member can favor
//!
//! # Design Pattern
//!
//! Creation goes through separate input types:
//! - [`RegistrationDraft`] - Untrusted input, every field optional
//! - [`NewUser`] - Validated input, ready to be stored

pub mod club;
pub mod user;

pub use club::{Club, UnknownClub};
pub use user::{NewUser, RegistrationDraft, User};
