use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};

use shared_utils::state::AppState;

use crate::handlers;

pub fn trainer_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/trainer/status", get(handlers::get_status))
        .route("/trainer/register", post(handlers::register_trainer))
        .route("/trainer/subscribe", post(handlers::subscribe))
        .route("/trainer/profile", put(handlers::update_profile))
        .route("/trainers", get(handlers::list_trainers))
        .route("/trainers/{user_id}", get(handlers::get_trainer))
        .with_state(state)
}
