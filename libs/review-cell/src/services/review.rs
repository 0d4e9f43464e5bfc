use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{ReviewStore, Store, TrainerStore};
use shared_models::review::{NewReview, MAX_RATING, MIN_RATING};
use shared_utils::state::AppState;
use shared_utils::validation::{as_int, is_supplied};

use crate::models::{CreateReviewRequest, ReviewError, ReviewView, ANONYMOUS_AUTHOR};

pub struct ReviewService {
    store: Arc<dyn Store>,
}

impl ReviewService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
        }
    }

    pub async fn add_review(&self, request: CreateReviewRequest) -> Result<i64, ReviewError> {
        let review = Self::validate(request)?;

        if self.store.find_trainer(review.trainer_id).await?.is_none() {
            return Err(ReviewError::TrainerNotFound);
        }

        let review_id = self.store.insert_review(review).await?;
        info!("Review {} added", review_id);

        Ok(review_id)
    }

    pub async fn list_reviews(&self, trainer_id: i64) -> Result<Vec<ReviewView>, ReviewError> {
        debug!("Fetching reviews for trainer {}", trainer_id);

        let reviews = self.store.list_reviews(trainer_id).await?;
        Ok(reviews.into_iter().map(ReviewView::from).collect())
    }

    fn validate(request: CreateReviewRequest) -> Result<NewReview, ReviewError> {
        let required = [
            request.trainer_id.as_ref(),
            request.user_id.as_ref(),
            request.rating.as_ref(),
        ];
        if !required.into_iter().all(is_supplied) {
            return Err(ReviewError::MissingFields);
        }

        let parse = |value: &Option<serde_json::Value>, field: &'static str| {
            value
                .as_ref()
                .and_then(as_int)
                .ok_or(ReviewError::InvalidField(field))
        };
        let trainer_id = parse(&request.trainer_id, "trainer_id")?;
        let user_id = parse(&request.user_id, "user_id")?;
        let rating = parse(&request.rating, "rating")?;

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReviewError::RatingOutOfRange);
        }

        // Only an absent name falls back; an explicit empty one is kept.
        let user_name = request
            .user_name
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        Ok(NewReview {
            trainer_id,
            user_id,
            user_name,
            rating,
            text: request.text.unwrap_or_default(),
        })
    }
}
