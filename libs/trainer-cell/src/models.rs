use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use review_cell::models::ReviewError;
use shared_database::DatabaseError;
use shared_models::error::AppError;
use shared_models::review::RatingSummary;
use shared_models::trainer::{ProfileChanges, Trainer};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterTrainerRequest {
    pub user_id: Option<Value>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeRequest {
    pub user_id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: Option<Value>,
    pub specialty: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
}

impl UpdateProfileRequest {
    pub fn changes(&self) -> ProfileChanges {
        ProfileChanges {
            specialty: self.specialty.clone(),
            description: self.description.clone(),
            photo: self.photo.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainerIdQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainerSearchQuery {
    pub search: Option<String>,
}

/// The trainer's own view of their account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerStatus {
    pub registered: bool,
    pub name: String,
    pub phone: String,
    pub specialty: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub subscription_end: Option<NaiveDate>,
    /// Stored flag, as last written by activation.
    pub is_active: bool,
    /// Live check of the end date against today.
    pub subscription_active: bool,
    pub photo_url: Option<String>,
}

impl TrainerStatus {
    pub fn new(trainer: Trainer, today: NaiveDate, photo_url: Option<String>) -> Self {
        let subscription_active = trainer.subscription_active_on(today);
        Self {
            registered: true,
            name: trainer.name,
            phone: trainer.phone,
            specialty: trainer.specialty,
            description: trainer.description,
            photo: trainer.photo,
            subscription_end: trainer.subscription_end,
            is_active: trainer.is_active,
            subscription_active,
            photo_url,
        }
    }
}

/// Response of the status lookup: the bare flag for unknown users.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatusResponse {
    Unregistered { registered: bool },
    Registered(TrainerStatus),
}

impl From<Option<TrainerStatus>> for StatusResponse {
    fn from(status: Option<TrainerStatus>) -> Self {
        match status {
            Some(status) => StatusResponse::Registered(status),
            None => StatusResponse::Unregistered { registered: false },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerListItem {
    pub user_id: i64,
    pub name: String,
    pub specialty: Option<String>,
    pub photo: Option<String>,
    pub rating_avg: f64,
    pub review_count: i64,
    pub photo_url: Option<String>,
}

impl TrainerListItem {
    pub fn new(trainer: Trainer, rating: RatingSummary, photo_url: Option<String>) -> Self {
        Self {
            user_id: trainer.user_id,
            name: trainer.name,
            specialty: trainer.specialty,
            photo: trainer.photo,
            rating_avg: rating.rating_avg,
            review_count: rating.review_count,
            photo_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerDetail {
    pub user_id: i64,
    pub name: String,
    pub specialty: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub rating_avg: f64,
    pub review_count: i64,
    pub photo_url: Option<String>,
}

impl TrainerDetail {
    pub fn new(trainer: Trainer, rating: RatingSummary, photo_url: Option<String>) -> Self {
        Self {
            user_id: trainer.user_id,
            name: trainer.name,
            specialty: trainer.specialty,
            description: trainer.description,
            photo: trainer.photo,
            rating_avg: rating.rating_avg,
            review_count: rating.review_count,
            photo_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionActivated {
    pub status: &'static str,
    pub days: i64,
    pub subscription_end: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid {0}")]
    InvalidField(&'static str),

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Trainer not found")]
    NotFound,

    #[error("Invalid subscription period of {0} days")]
    InvalidPeriod(i64),

    #[error(transparent)]
    Rating(#[from] ReviewError),

    #[error(transparent)]
    Database(DatabaseError),
}

impl From<DatabaseError> for TrainerError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Duplicate(_) => TrainerError::AlreadyRegistered,
            other => TrainerError::Database(other),
        }
    }
}

impl From<TrainerError> for AppError {
    fn from(error: TrainerError) -> Self {
        match error {
            TrainerError::MissingFields => AppError::MissingFields(error.to_string()),
            TrainerError::InvalidField(_) => AppError::InvalidInput(error.to_string()),
            TrainerError::AlreadyRegistered => AppError::Conflict(error.to_string()),
            TrainerError::NotFound => AppError::NotFound(error.to_string()),
            TrainerError::InvalidPeriod(_) => AppError::Internal(error.to_string()),
            TrainerError::Rating(e) => e.into(),
            TrainerError::Database(e) => e.into(),
        }
    }
}
