mod health;
mod predict;
mod records;
mod reference;

pub use health::health_check;
pub use predict::predict;
pub use records::{add_record, delete_record, list_today, update_record};
pub use reference::{list_cities, list_vehicles, stats};

use std::sync::Arc;

use axum::http::StatusCode;
use freightcast_model::SharedEngine;

use crate::error::ApiError;
use crate::state::AppState;

/// Run record-file IO and retraining on the blocking pool
async fn run_blocking<T, F>(state: &AppState, work: F) -> Result<T, ApiError>
where
    F: FnOnce(&SharedEngine) -> freightcast_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let engine = Arc::clone(&state.engine);
    tokio::task::spawn_blocking(move || work(&engine))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Blocking task failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        })?
        .map_err(ApiError::from)
}
