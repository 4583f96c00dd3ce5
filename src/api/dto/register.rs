//! DTO for the registration endpoint.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entities::RegistrationDraft;

/// Request body for `POST /register`.
///
/// Every field is optional here; presence and format are checked by
/// [`crate::domain::registration::validate`] so that errors come out in a
/// fixed order. Only a JSON object is accepted; positional arrays are
/// rejected before validation.
#[derive(Debug, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub favorite_club: Option<String>,

    /// Any JSON value; coerced to a boolean by [`coerce_flag`].
    pub news_letter: Option<Value>,
}

impl TryFrom<Map<String, Value>> for RegisterRequest {
    type Error = serde_json::Error;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            username: take_string(&mut fields, "username")?,
            password: take_string(&mut fields, "password")?,
            favorite_club: take_string(&mut fields, "favoriteClub")?,
            news_letter: fields.remove("newsLetter").filter(|v| !v.is_null()),
        })
    }
}

/// Removes `key` and reads it as an optional string; `null` counts as absent.
fn take_string(
    fields: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<String>, serde_json::Error> {
    match fields.remove(key) {
        Some(value) => serde_json::from_value(value),
        None => Ok(None),
    }
}

impl From<RegisterRequest> for RegistrationDraft {
    fn from(req: RegisterRequest) -> Self {
        RegistrationDraft {
            username: req.username,
            password: req.password,
            favorite_club: req.favorite_club,
            news_letter: req.news_letter.as_ref().map(coerce_flag),
        }
    }
}

/// Interprets a loosely typed JSON flag as a boolean.
///
/// - booleans are taken as-is
/// - strings are true for `true`, `1`, `yes`, `on` (case-insensitive)
/// - numbers are true when non-zero
/// - everything else is false
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}
