use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub trainer_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub rating: i64,
    pub text: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub trainer_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub rating: i64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub rating_avg: f64,
    pub review_count: i64,
}

impl RatingSummary {
    /// Builds the summary from a raw `AVG`/`COUNT` pair. The average is
    /// rounded to one decimal, ties to even, and is 0.0 when there are no
    /// reviews.
    pub fn from_stats(average: Option<f64>, review_count: i64) -> Self {
        let rating_avg = match average {
            Some(avg) if review_count > 0 => (avg * 10.0).round_ties_even() / 10.0,
            _ => 0.0,
        };

        Self { rating_avg, review_count }
    }
}
