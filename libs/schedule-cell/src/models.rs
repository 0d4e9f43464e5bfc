use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_database::DatabaseError;
use shared_models::error::AppError;
use shared_models::schedule::{day_name, ScheduleSlot};

pub const DEFAULT_MAX_CLIENTS: i64 = 1;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSlotRequest {
    pub user_id: Option<Value>,
    pub day: Option<Value>,
    pub time: Option<String>,
    pub max_clients: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleQuery {
    pub user_id: Option<String>,
}

/// A slot template as the trainer sees it in their schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub id: i64,
    pub day: i64,
    pub day_name: &'static str,
    pub time: String,
    pub max_clients: i64,
}

impl From<ScheduleSlot> for SlotView {
    fn from(slot: ScheduleSlot) -> Self {
        Self {
            id: slot.id,
            day: slot.day_of_week,
            day_name: day_name(slot.day_of_week),
            time: slot.time,
            max_clients: slot.max_clients,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid {0}")]
    InvalidField(&'static str),

    #[error("Invalid date")]
    InvalidDate,

    #[error("Trainer not found")]
    TrainerNotFound,

    #[error("Slot not found")]
    SlotNotFound,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<ScheduleError> for AppError {
    fn from(error: ScheduleError) -> Self {
        match error {
            ScheduleError::MissingFields => AppError::MissingFields(error.to_string()),
            ScheduleError::InvalidField(_) | ScheduleError::InvalidDate => {
                AppError::InvalidInput(error.to_string())
            }
            ScheduleError::TrainerNotFound | ScheduleError::SlotNotFound => {
                AppError::NotFound(error.to_string())
            }
            ScheduleError::Database(e) => e.into(),
        }
    }
}
