//! Catch-all boundary for unexpected faults.
//!
//! Handlers signal an unexpected fault by returning [`AppError::Internal`],
//! which tags the response with a [`Fault`] extension. Panics are caught by
//! `tower_http::catch_panic` and converted the same way by
//! [`panic_response`]. The boundary then shapes the 500 body by runtime mode:
//!
//! - **production**: `{"error": {"message": "server error"}}`
//! - **otherwise**: `{"message": "<fault>", "error": <details>}`
//!
//! Client errors (400, 404) carry no [`Fault`] and pass through untouched.

use std::any::Any;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::config::RuntimeMode;
use crate::error::{AppError, Fault, generic_fault_body};

/// Rewrites fault responses according to the runtime mode.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/user", get(list_users_handler))
///     .layer(CatchPanicLayer::custom(error_boundary::panic_response))
///     .layer(middleware::from_fn_with_state(mode, error_boundary::layer));
/// ```
pub async fn layer(State(mode): State<RuntimeMode>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let Some(fault) = response.extensions_mut().remove::<Fault>() else {
        return response;
    };

    let body = if mode.is_production() {
        tracing::error!(fault = %fault.message, "Unhandled fault");
        generic_fault_body()
    } else {
        tracing::error!(fault = %fault.message, details = %fault.details, "Unhandled fault");
        json!({ "message": fault.message, "error": fault.details })
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Converts a handler panic into a fault response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal("Handler panicked", json!({ "panic": message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_response_with_str_payload() {
        let response = panic_response(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.details["panic"], "boom");
    }

    #[test]
    fn test_panic_response_with_string_payload() {
        let response = panic_response(Box::new(String::from("formatted boom")));

        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.details["panic"], "formatted boom");
    }

    #[test]
    fn test_panic_response_with_opaque_payload() {
        let response = panic_response(Box::new(42_u8));

        let fault = response.extensions().get::<Fault>().unwrap();
        assert_eq!(fault.details["panic"], "unknown panic payload");
    }
}
