use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Client page
        .route_service("/", ServeFile::new("static/index.html"))
        // Health check
        .route("/health", get(handlers::health_check))
        // WebRTC signaling proxy
        .route(
            "/webrtc-signal",
            post(handlers::webrtc_signal).fallback(handlers::method_not_allowed),
        )
        // Standup records
        .route(
            "/save-standup-data",
            post(handlers::save_standup_data).fallback(handlers::method_not_allowed),
        )
        .route(
            "/get-previous-day-data",
            get(handlers::get_previous_day_data).fallback(handlers::method_not_allowed),
        )
        .route(
            "/get-specific-day-data",
            get(handlers::get_specific_day_data).fallback(handlers::method_not_allowed),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
