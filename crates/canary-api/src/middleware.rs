//! Middleware hooks for the API. Small on purpose; the badge endpoint is
//! meant to be embedded cross-origin, so CORS stays permissive.
use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
