use tower_http::cors::{Any, CorsLayer};

/// Browser clients are served from other origins; every route accepts
/// cross-origin requests.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
