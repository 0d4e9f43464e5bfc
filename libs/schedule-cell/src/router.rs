use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};

use shared_utils::state::AppState;

use crate::handlers;

pub fn schedule_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Trainer-side template management
        .route(
            "/trainer/schedule",
            get(handlers::list_slots).post(handlers::add_slot),
        )
        .route("/trainer/schedule/{slot_id}", delete(handlers::delete_slot))
        // Client-side availability
        .route("/schedule/{trainer_id}/{date}", get(handlers::get_availability))
        .with_state(state)
}
