//! CORS middleware

use http::HeaderValue;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create a CORS layer for the configured origins.
///
/// `"*"` (or an empty list) allows any origin. Origins that are not valid
/// header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed))
}
