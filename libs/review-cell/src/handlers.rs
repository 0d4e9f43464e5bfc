use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::extractor::{AppJson, AppPath};
use shared_utils::state::AppState;

use crate::models::{CreateReviewRequest, ReviewView};
use crate::services::ReviewService;

#[axum::debug_handler]
pub async fn get_reviews(
    State(state): State<Arc<AppState>>,
    AppPath(trainer_id): AppPath<i64>,
) -> Result<Json<Vec<ReviewView>>, AppError> {
    let service = ReviewService::new(&state);

    let reviews = service.list_reviews(trainer_id).await?;

    Ok(Json(reviews))
}

#[axum::debug_handler]
pub async fn add_review(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CreateReviewRequest>,
) -> Result<Json<Value>, AppError> {
    let service = ReviewService::new(&state);

    service.add_review(request).await?;

    Ok(Json(json!({ "status": "success" })))
}
