//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod register;
pub mod root;
pub mod users;

pub use register::register_handler;
pub use root::{book_handler, index_handler};
pub use users::{delete_user_handler, list_users_handler};
