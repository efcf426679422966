use std::sync::Arc;

use axum::{extract::State, Json};
use freightcast_core::models::{PredictionResult, GENERAL_MODEL};
use freightcast_core::validation::validate_route;

use super::run_blocking;
use crate::dto::PredictRequest;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

pub async fn predict(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<PredictRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    let origin = request
        .origin
        .filter(|o| !o.trim().is_empty())
        .unwrap_or_else(|| state.engine.settings().default_origin.clone());
    let vehicle = request.vehicle_type.unwrap_or_else(|| GENERAL_MODEL.to_string());
    let destination = request.destination;

    tracing::info!(
        origin = %origin,
        destination = %destination,
        vehicle = %vehicle,
        "Processing prediction request"
    );

    validate_route(&origin, &destination)?;

    let result =
        run_blocking(&state, move |engine| engine.predict(&origin, &destination, &vehicle)).await?;
    Ok(Json(result))
}
