use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::dates;
use shared_utils::extractor::{AppJson, AppPath};
use shared_utils::state::AppState;
use shared_utils::validation::require_query_int;

use crate::models::{
    RegisterTrainerRequest, StatusResponse, SubscribeRequest, SubscriptionActivated,
    TrainerDetail, TrainerIdQuery, TrainerListItem, TrainerSearchQuery, UpdateProfileRequest,
};
use crate::services::{SubscriptionService, TrainerService};

// ==============================================================================
// TRAINER-FACING HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_status(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TrainerIdQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    let user_id = require_query_int(query.user_id.as_deref(), "user_id")?;
    let service = TrainerService::new(&state);

    let status = service.status(user_id, dates::today()).await?;

    Ok(Json(status.into()))
}

#[axum::debug_handler]
pub async fn register_trainer(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<RegisterTrainerRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = TrainerService::new(&state);

    service.register(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "status": "registered" }))))
}

#[axum::debug_handler]
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<SubscribeRequest>,
) -> Result<Json<SubscriptionActivated>, AppError> {
    let service = SubscriptionService::new(&state);

    let activated = service.activate(request, dates::today()).await?;

    Ok(Json(activated))
}

#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<UpdateProfileRequest>,
) -> Result<Json<Value>, AppError> {
    let service = TrainerService::new(&state);

    service.update_profile(request).await?;

    Ok(Json(json!({ "status": "updated" })))
}

// ==============================================================================
// CLIENT-FACING HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_trainers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TrainerSearchQuery>,
) -> Result<Json<Vec<TrainerListItem>>, AppError> {
    let service = TrainerService::new(&state);

    let trainers = service
        .list_visible(query.search.as_deref(), dates::today())
        .await?;

    Ok(Json(trainers))
}

#[axum::debug_handler]
pub async fn get_trainer(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<i64>,
) -> Result<Json<TrainerDetail>, AppError> {
    let service = TrainerService::new(&state);

    let trainer = service.visible_detail(user_id, dates::today()).await?;

    Ok(Json(trainer))
}
