//! CORS and security response headers.

use axum::{
    Router,
    http::{HeaderName, HeaderValue, header},
};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers added to every response unless a handler already set them.
fn security_headers() -> [(HeaderName, HeaderValue); 6] {
    [
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (header::X_DNS_PREFETCH_CONTROL, HeaderValue::from_static("off")),
        (
            HeaderName::from_static("x-download-options"),
            HeaderValue::from_static("noopen"),
        ),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("0")),
        (
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=15552000; includeSubDomains"),
        ),
    ]
}

/// Allows any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Wraps `router` with the security header layers.
///
/// # Example
///
/// ```rust,ignore
/// let app = security::with_headers(Router::new().route("/", get(index_handler)));
/// ```
pub fn with_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    security_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name, value))
        })
}
