//! Registration validation.
//!
//! [`validate`] is a pure function from untrusted input to a [`NewUser`].
//! It never touches the store, so the rules can be tested in isolation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. `username` present
//! 2. `password` present
//! 3. `favoriteClub` present
//! 4. `username` is 6-20 characters
//! 5. `password` is 8-36 characters
//! 6. `password` is ASCII alphanumeric with at least one letter and one digit
//! 7. `favoriteClub` is a recognized [`Club`]

use crate::domain::entities::{Club, NewUser, RegistrationDraft};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use validator::ValidateLength;

pub const USERNAME_MIN_LEN: u64 = 6;
pub const USERNAME_MAX_LEN: u64 = 20;
pub const PASSWORD_MIN_LEN: u64 = 8;
pub const PASSWORD_MAX_LEN: u64 = 36;

/// Passwords may only contain ASCII letters and digits.
static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{8,}$").unwrap());

/// The format rule a present field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    UsernameLength,
    PasswordLength,
    PasswordComplexity,
    UnknownClub,
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatRule::UsernameLength => write!(
                f,
                "Username must be between {USERNAME_MIN_LEN} and {USERNAME_MAX_LEN} characters"
            ),
            FormatRule::PasswordLength => write!(
                f,
                "Password must be between {PASSWORD_MIN_LEN} and {PASSWORD_MAX_LEN} characters"
            ),
            FormatRule::PasswordComplexity => f.write_str(
                "Password must contain at least one letter and one digit and only letters and digits",
            ),
            FormatRule::UnknownClub => f.write_str("Not a valid club"),
        }
    }
}

/// Why a registration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A required field was absent, `null`, or empty.
    #[error("{0} required")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidFormat(FormatRule),
}

/// Validates a registration draft.
///
/// `news_letter` defaults to `false` when absent and is not otherwise checked.
///
/// # Errors
///
/// Returns the first [`RegistrationError`] in check order.
pub fn validate(draft: RegistrationDraft) -> Result<NewUser, RegistrationError> {
    let username = required(draft.username, "username")?;
    let password = required(draft.password, "password")?;
    let favorite_club = required(draft.favorite_club, "favoriteClub")?;

    if !username.validate_length(Some(USERNAME_MIN_LEN), Some(USERNAME_MAX_LEN), None) {
        return Err(RegistrationError::InvalidFormat(FormatRule::UsernameLength));
    }

    if !password.validate_length(Some(PASSWORD_MIN_LEN), Some(PASSWORD_MAX_LEN), None) {
        return Err(RegistrationError::InvalidFormat(FormatRule::PasswordLength));
    }

    if !is_complex_enough(&password) {
        return Err(RegistrationError::InvalidFormat(
            FormatRule::PasswordComplexity,
        ));
    }

    let favorite_club = favorite_club
        .parse::<Club>()
        .map_err(|_| RegistrationError::InvalidFormat(FormatRule::UnknownClub))?;

    Ok(NewUser {
        username,
        password,
        favorite_club,
        news_letter: draft.news_letter.unwrap_or(false),
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RegistrationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(RegistrationError::MissingField(field))
}

fn is_complex_enough(password: &str) -> bool {
    PASSWORD_CHARSET.is_match(password)
        && password.bytes().any(|b| b.is_ascii_alphabetic())
        && password.bytes().any(|b| b.is_ascii_digit())
}
