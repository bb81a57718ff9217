//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Aircraft registration and settings
        .route("/aircrafts/{aircraft_id}", put(handlers::put_aircraft))
        .route("/aircrafts/{aircraft_id}", get(handlers::get_aircraft))
        // Flight chain
        .route(
            "/aircrafts/{aircraft_id}/flights",
            get(handlers::list_flights),
        )
        .route(
            "/aircrafts/{aircraft_id}/flights",
            post(handlers::create_flight),
        )
        .route(
            "/aircrafts/{aircraft_id}/flights/{flight_id}",
            axum::routing::delete(handlers::delete_flight),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
