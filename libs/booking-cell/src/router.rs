use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_utils::state::AppState;

use crate::handlers;

pub fn booking_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/book", post(handlers::book))
        .route("/trainer/bookings", get(handlers::trainer_bookings))
        .route("/client_bookings/{telegram_id}", get(handlers::client_bookings))
        .route("/cancel_booking/{booking_id}", post(handlers::cancel_booking))
        .with_state(state)
}
