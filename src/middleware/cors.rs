use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Browser clients from any origin may call every endpoint.
pub fn open_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(PREFLIGHT_MAX_AGE)
}
