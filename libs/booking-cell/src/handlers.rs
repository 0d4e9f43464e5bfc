use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::booking::ClientBooking;
use shared_models::error::AppError;
use shared_utils::extractor::{AppJson, AppPath};
use shared_utils::state::AppState;
use shared_utils::validation::require_query_int;

use crate::models::{BookingConfirmation, BookingRequest, TrainerBookingView, TrainerBookingsQuery};
use crate::services::{AdmissionService, BookingService};

#[axum::debug_handler]
pub async fn book(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<BookingRequest>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let service = AdmissionService::new(&state);

    let booking_id = service.book(request).await?;

    Ok(Json(BookingConfirmation {
        status: "success",
        booking_id,
    }))
}

#[axum::debug_handler]
pub async fn trainer_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TrainerBookingsQuery>,
) -> Result<Json<Vec<TrainerBookingView>>, AppError> {
    let trainer_id = require_query_int(query.user_id.as_deref(), "user_id")?;
    let service = BookingService::new(&state);

    let bookings = service
        .trainer_bookings(trainer_id, query.date.as_deref())
        .await?;

    Ok(Json(bookings))
}

#[axum::debug_handler]
pub async fn client_bookings(
    State(state): State<Arc<AppState>>,
    AppPath(telegram_id): AppPath<i64>,
) -> Result<Json<Vec<ClientBooking>>, AppError> {
    let service = BookingService::new(&state);

    let bookings = service.client_bookings(telegram_id).await?;

    Ok(Json(bookings))
}

#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    AppPath(booking_id): AppPath<i64>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);

    service.cancel(booking_id).await?;

    Ok(Json(json!({ "status": "cancelled" })))
}
