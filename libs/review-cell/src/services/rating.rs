use std::sync::Arc;

use shared_database::{ReviewStore, Store};
use shared_models::review::RatingSummary;
use shared_utils::state::AppState;

use crate::models::ReviewError;

/// Rating aggregates, recomputed from the review rows on every read.
pub struct RatingService {
    store: Arc<dyn Store>,
}

impl RatingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
        }
    }

    pub async fn summary(&self, trainer_id: i64) -> Result<RatingSummary, ReviewError> {
        Ok(self.store.rating_summary(trainer_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::review::NewReview;
    use shared_utils::test_utils::TestContext;

    #[tokio::test]
    async fn test_trainer_without_reviews() {
        let ctx = TestContext::new().await;
        ctx.seed_trainer(1, "Anna").await;

        let summary = RatingService::new(&ctx.state).summary(1).await.unwrap();
        assert_eq!(summary, RatingSummary { rating_avg: 0.0, review_count: 0 });
    }

    #[tokio::test]
    async fn test_summary_reflects_new_reviews() {
        let ctx = TestContext::new().await;
        let service = RatingService::new(&ctx.state);

        for rating in [5, 4] {
            ctx.store()
                .insert_review(NewReview {
                    trainer_id: 1,
                    user_id: 10,
                    user_name: "Client".to_string(),
                    rating,
                    text: String::new(),
                })
                .await
                .unwrap();
        }

        let summary = service.summary(1).await.unwrap();
        assert_eq!(summary.rating_avg, 4.5);
        assert_eq!(summary.review_count, 2);
    }
}
