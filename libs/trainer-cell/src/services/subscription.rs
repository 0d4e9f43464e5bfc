use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing::info;

use shared_database::{Store, TrainerStore};
use shared_utils::state::AppState;
use shared_utils::validation::{as_int, is_supplied};

use crate::models::{SubscribeRequest, SubscriptionActivated, TrainerError};

/// Paid visibility periods. Payment itself happens elsewhere; this only
/// records the period once the trainer is entitled to it.
pub struct SubscriptionService {
    store: Arc<dyn Store>,
    days: i64,
}

impl SubscriptionService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
            days: state.config.subscription_days,
        }
    }

    /// Starts a fresh period counted from `today`. Re-activating replaces the
    /// end date rather than extending it.
    pub async fn activate(
        &self,
        request: SubscribeRequest,
        today: NaiveDate,
    ) -> Result<SubscriptionActivated, TrainerError> {
        if !is_supplied(request.user_id.as_ref()) {
            return Err(TrainerError::MissingFields);
        }
        let user_id = request
            .user_id
            .as_ref()
            .and_then(as_int)
            .ok_or(TrainerError::InvalidField("user_id"))?;

        let subscription_end = Duration::try_days(self.days)
            .and_then(|period| today.checked_add_signed(period))
            .ok_or(TrainerError::InvalidPeriod(self.days))?;

        if !self.store.activate_subscription(user_id, subscription_end).await? {
            return Err(TrainerError::NotFound);
        }

        info!("Subscription of trainer {} active until {}", user_id, subscription_end);

        Ok(SubscriptionActivated {
            status: "subscribed",
            days: self.days,
            subscription_end,
        })
    }

    /// Live expiry check. Unknown trainers have no subscription.
    pub async fn check_subscription(&self, user_id: i64, today: NaiveDate) -> Result<bool, TrainerError> {
        let trainer = self.store.find_trainer(user_id).await?;
        Ok(trainer.is_some_and(|t| t.subscription_active_on(today)))
    }
}
