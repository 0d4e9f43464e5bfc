use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_models::schedule::AvailableSlot;
use shared_utils::extractor::{AppJson, AppPath};
use shared_utils::state::AppState;
use shared_utils::validation::require_query_int;

use crate::models::{CreateSlotRequest, ScheduleQuery, SlotView};
use crate::services::{AvailabilityService, ScheduleService};

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Vec<SlotView>>, AppError> {
    let trainer_id = require_query_int(query.user_id.as_deref(), "user_id")?;
    let service = ScheduleService::new(&state);

    let slots = service.list_slots(trainer_id).await?;

    Ok(Json(slots))
}

#[axum::debug_handler]
pub async fn add_slot(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CreateSlotRequest>,
) -> Result<Json<Value>, AppError> {
    let service = ScheduleService::new(&state);

    let slot_id = service.add_slot(request).await?;

    Ok(Json(json!({ "status": "added", "id": slot_id })))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<AppState>>,
    AppPath(slot_id): AppPath<i64>,
) -> Result<Json<Value>, AppError> {
    let service = ScheduleService::new(&state);

    service.delete_slot(slot_id).await?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    AppPath((trainer_id, date)): AppPath<(i64, String)>,
) -> Result<Json<Vec<AvailableSlot>>, AppError> {
    let service = AvailabilityService::new(&state);

    let slots = service.available_slots(trainer_id, &date).await?;

    Ok(Json(slots))
}
