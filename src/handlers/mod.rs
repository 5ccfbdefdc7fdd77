pub mod settings;

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// API route plus static file serving for the frontend, CORS open to any
/// origin.
pub fn router(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();
    Router::new()
        .route("/api/camera-settings", post(settings::camera_settings))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
