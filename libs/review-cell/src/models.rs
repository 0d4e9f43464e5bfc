use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_database::DatabaseError;
use shared_models::error::AppError;
use shared_models::review::Review;

pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReviewRequest {
    pub trainer_id: Option<Value>,
    pub user_id: Option<Value>,
    pub user_name: Option<String>,
    pub rating: Option<Value>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub user_name: String,
    pub rating: i64,
    pub text: String,
    pub created_at: String,
}

impl From<Review> for ReviewView {
    fn from(review: Review) -> Self {
        Self {
            user_name: review.user_name,
            rating: review.rating,
            text: review.text,
            created_at: review.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid {0}")]
    InvalidField(&'static str),

    #[error("Rating must be 1-5")]
    RatingOutOfRange,

    #[error("Trainer not found")]
    TrainerNotFound,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<ReviewError> for AppError {
    fn from(error: ReviewError) -> Self {
        match error {
            ReviewError::MissingFields => AppError::MissingFields(error.to_string()),
            ReviewError::InvalidField(_) | ReviewError::RatingOutOfRange => {
                AppError::InvalidInput(error.to_string())
            }
            ReviewError::TrainerNotFound => AppError::NotFound(error.to_string()),
            ReviewError::Database(e) => e.into(),
        }
    }
}
