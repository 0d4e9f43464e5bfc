use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use booking_cell::router::booking_routes;
use review_cell::router::review_routes;
use schedule_cell::router::schedule_routes;
use shared_utils::state::AppState;
use trainer_cell::router::trainer_routes;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(trainer_routes(state.clone()))
        .merge(schedule_routes(state.clone()))
        .merge(booking_routes(state.clone()))
        .merge(review_routes(state));

    Router::new()
        .route("/", get(|| async { "Trainer Booking API is running!" }))
        .nest("/api", api)
}
