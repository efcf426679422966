use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use freightcast_core::models::RecordId;
use freightcast_store::RecordStore;

use super::run_blocking;
use crate::dto::{
    AddRecordRequest, DeletedResponse, RecordResponse, TodayResponse, UpdateRecordRequest,
};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub async fn add_record(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<AddRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let draft = request.into_new_record()?;
    let record = run_blocking(&state, move |engine| engine.store().add_record(draft)).await?;
    Ok((StatusCode::CREATED, Json(RecordResponse::new(record))))
}

pub async fn list_today(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TodayResponse>, ApiError> {
    let records = run_blocking(&state, |engine| engine.store().list_today()).await?;
    Ok(Json(TodayResponse {
        count: records.len(),
        records,
    }))
}

pub async fn update_record(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(request): ApiJson<UpdateRecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let patch = request.into_patch()?;
    let record =
        run_blocking(&state, move |engine| engine.store().update_record(id, patch)).await?;
    Ok(Json(RecordResponse::new(record)))
}

pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<RecordId>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = run_blocking(&state, move |engine| engine.store().delete_record(id)).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
