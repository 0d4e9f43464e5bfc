use async_trait::async_trait;
use tracing::debug;

use shared_models::review::{NewReview, RatingSummary, Review};

use crate::sqlite::Database;
use crate::store::{ReviewStore, StoreResult};

#[async_trait]
impl ReviewStore for Database {
    async fn insert_review(&self, review: NewReview) -> StoreResult<i64> {
        debug!("Adding {}-star review for trainer {}", review.rating, review.trainer_id);

        let result = sqlx::query(
            "INSERT INTO reviews (trainer_id, user_id, user_name, rating, text) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(review.trainer_id)
        .bind(review.user_id)
        .bind(&review.user_name)
        .bind(review.rating)
        .bind(&review.text)
        .execute(self.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_reviews(&self, trainer_id: i64) -> StoreResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, trainer_id, user_id, user_name, rating, text, created_at
            FROM reviews
            WHERE trainer_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(trainer_id)
        .fetch_all(self.pool())
        .await?;

        Ok(reviews)
    }

    async fn rating_summary(&self, trainer_id: i64) -> StoreResult<RatingSummary> {
        let (average, count): (Option<f64>, i64) =
            sqlx::query_as("SELECT AVG(rating), COUNT(*) FROM reviews WHERE trainer_id = ?")
                .bind(trainer_id)
                .fetch_one(self.pool())
                .await?;

        Ok(RatingSummary::from_stats(average, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(trainer_id: i64, rating: i64, text: &str) -> NewReview {
        NewReview {
            trainer_id,
            user_id: 500,
            user_name: "Client".to_string(),
            rating,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_summary_without_reviews() {
        let db = Database::in_memory().await.unwrap();
        let summary = db.rating_summary(1).await.unwrap();

        assert_eq!(summary.rating_avg, 0.0);
        assert_eq!(summary.review_count, 0);
    }

    #[tokio::test]
    async fn test_summary_averages_per_trainer() {
        let db = Database::in_memory().await.unwrap();
        db.insert_review(review(1, 5, "great")).await.unwrap();
        db.insert_review(review(1, 4, "")).await.unwrap();
        db.insert_review(review(1, 4, "ok")).await.unwrap();
        db.insert_review(review(2, 1, "no")).await.unwrap();

        let summary = db.rating_summary(1).await.unwrap();
        assert_eq!(summary.rating_avg, 4.3);
        assert_eq!(summary.review_count, 3);
    }

    #[tokio::test]
    async fn test_summary_tie_rounds_to_even() {
        let db = Database::in_memory().await.unwrap();
        for rating in [4, 4, 4, 5] {
            db.insert_review(review(1, rating, "")).await.unwrap();
        }

        let summary = db.rating_summary(1).await.unwrap();
        assert_eq!(summary.rating_avg, 4.2);
        assert_eq!(summary.review_count, 4);
    }

    #[tokio::test]
    async fn test_reviews_are_newest_first() {
        let db = Database::in_memory().await.unwrap();
        db.insert_review(review(1, 3, "first")).await.unwrap();
        db.insert_review(review(1, 5, "second")).await.unwrap();

        let reviews = db.list_reviews(1).await.unwrap();
        let texts: Vec<&str> = reviews.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_rating_outside_range_violates_check() {
        let db = Database::in_memory().await.unwrap();
        assert!(db.insert_review(review(1, 6, "too good")).await.is_err());
        assert!(db.insert_review(review(1, 0, "too bad")).await.is_err());
    }
}
