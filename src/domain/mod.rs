//! Domain layer containing business entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`registration`] - Pure validation of registration input
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or storage layers.
//! Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod registration;
pub mod repositories;
