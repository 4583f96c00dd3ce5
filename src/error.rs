//! Application error type shared across layers.
//!
//! Client errors ([`AppError::Validation`], [`AppError::NotFound`]) are
//! answered directly with a plain-text body. [`AppError::Internal`] is an
//! unexpected fault: it is rendered as a generic 500 and tagged with a
//! [`Fault`] extension so the error boundary can decide how much detail to
//! disclose (see [`crate::api::middleware::error_boundary`]).

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::registration::RegistrationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

/// An unexpected fault attached to a 500 response.
///
/// Carried in the response extensions; the boundary removes it before the
/// response leaves the service.
#[derive(Debug, Clone)]
pub struct Fault {
    pub message: String,
    pub details: Value,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body sent for a 500 when no detail may be disclosed.
pub fn generic_fault_body() -> Value {
    json!({ "error": { "message": "server error" } })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation { message } | AppError::NotFound { message } => {
                (status, message).into_response()
            }
            AppError::Internal { message, details } => {
                let mut response = (status, Json(generic_fault_body())).into_response();
                response
                    .extensions_mut()
                    .insert(Fault { message, details });
                response
            }
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(e: RegistrationError) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request(e.body_text())
    }
}
