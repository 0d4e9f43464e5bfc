use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_utils::state::AppState;

use crate::handlers;

pub fn review_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/reviews", post(handlers::add_review))
        .route("/reviews/{trainer_id}", get(handlers::get_reviews))
        .with_state(state)
}
