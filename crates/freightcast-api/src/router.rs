use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Prediction
        .route("/api/v1/predict", post(handlers::predict))

        // Same-day records
        .route("/api/v1/records", post(handlers::add_record))
        .route("/api/v1/records/today", get(handlers::list_today))
        .route(
            "/api/v1/records/{id}",
            put(handlers::update_record).delete(handlers::delete_record),
        )

        // Reference data
        .route("/api/v1/vehicles", get(handlers::list_vehicles))
        .route("/api/v1/cities", get(handlers::list_cities))
        .route("/api/v1/stats", get(handlers::stats))

        .with_state(state)
}
