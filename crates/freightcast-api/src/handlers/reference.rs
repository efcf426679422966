use std::sync::Arc;

use axum::{extract::State, Json};
use freightcast_model::EngineStats;

use super::run_blocking;
use crate::dto::{CitiesResponse, CityInfo};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(run_blocking(&state, |engine| engine.vehicle_types_known()).await?))
}

/// Cities with the default origin first, the rest by name
pub async fn list_cities(State(state): State<Arc<AppState>>) -> Json<CitiesResponse> {
    let table = state.engine.cities();
    let origin = &state.engine.settings().default_origin;

    let mut cities: Vec<CityInfo> = table
        .entries()
        .iter()
        .map(|c| CityInfo {
            name: c.name.clone(),
            has_history: c.has_history,
            is_origin: &c.name == origin,
            lat: c.lat,
            lng: c.lon,
        })
        .collect();
    cities.sort_by(|a, b| (!a.is_origin, &a.name).cmp(&(!b.is_origin, &b.name)));

    Json(CitiesResponse {
        cities,
        cities_with_history: table.history_cities().into_iter().map(str::to_string).collect(),
    })
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<EngineStats>, ApiError> {
    Ok(Json(run_blocking(&state, |engine| engine.stats()).await?))
}
