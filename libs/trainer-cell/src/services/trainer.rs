use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::try_join_all;
use tracing::{debug, info};

use review_cell::RatingService;
use shared_database::{Store, TrainerStore};
use shared_models::trainer::{NewTrainer, Trainer};
use shared_utils::files::{resolve_photo, FileUrlResolver};
use shared_utils::state::AppState;
use shared_utils::validation::{as_int, is_supplied, is_supplied_text};

use crate::models::{
    RegisterTrainerRequest, TrainerDetail, TrainerError, TrainerListItem, TrainerStatus,
    UpdateProfileRequest,
};

pub struct TrainerService {
    store: Arc<dyn Store>,
    files: Arc<dyn FileUrlResolver>,
    ratings: RatingService,
}

impl TrainerService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
            files: Arc::clone(&state.files),
            ratings: RatingService::new(state),
        }
    }

    pub async fn register(&self, request: RegisterTrainerRequest) -> Result<i64, TrainerError> {
        if !is_supplied(request.user_id.as_ref())
            || !is_supplied_text(request.name.as_deref())
            || !is_supplied_text(request.phone.as_deref())
        {
            return Err(TrainerError::MissingFields);
        }

        let user_id = request
            .user_id
            .as_ref()
            .and_then(as_int)
            .ok_or(TrainerError::InvalidField("user_id"))?;

        let trainer = NewTrainer {
            user_id,
            name: request.name.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
        };

        let id = self.store.insert_trainer(trainer).await?;
        info!("Trainer {} registered", user_id);

        Ok(id)
    }

    /// `None` when the user never registered.
    pub async fn status(&self, user_id: i64, today: NaiveDate) -> Result<Option<TrainerStatus>, TrainerError> {
        let Some(trainer) = self.store.find_trainer(user_id).await? else {
            return Ok(None);
        };

        let photo_url = resolve_photo(self.files.as_ref(), trainer.photo.as_deref()).await;
        Ok(Some(TrainerStatus::new(trainer, today, photo_url)))
    }

    /// Applies whichever profile fields were supplied. A request without any
    /// of them is accepted and changes nothing.
    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<(), TrainerError> {
        if !is_supplied(request.user_id.as_ref()) {
            return Err(TrainerError::MissingFields);
        }
        let user_id = request
            .user_id
            .as_ref()
            .and_then(as_int)
            .ok_or(TrainerError::InvalidField("user_id"))?;

        let changes = request.changes();
        if changes.is_empty() {
            debug!("Empty profile update for trainer {}", user_id);
            return Ok(());
        }

        let updated = self.store.update_profile(user_id, &changes).await?;
        if updated == 0 {
            return Err(TrainerError::NotFound);
        }

        info!("Profile of trainer {} updated", user_id);
        Ok(())
    }

    pub async fn list_visible(
        &self,
        search: Option<&str>,
        today: NaiveDate,
    ) -> Result<Vec<TrainerListItem>, TrainerError> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let trainers = self.store.list_visible_trainers(search, today).await?;
        debug!("{} visible trainers (search: {:?})", trainers.len(), search);

        try_join_all(trainers.into_iter().map(|trainer| self.list_item(trainer))).await
    }

    pub async fn visible_detail(&self, user_id: i64, today: NaiveDate) -> Result<TrainerDetail, TrainerError> {
        let trainer = self
            .store
            .find_visible_trainer(user_id, today)
            .await?
            .ok_or(TrainerError::NotFound)?;

        let (rating, photo_url) = futures::join!(
            self.ratings.summary(trainer.user_id),
            resolve_photo(self.files.as_ref(), trainer.photo.as_deref()),
        );

        Ok(TrainerDetail::new(trainer, rating?, photo_url))
    }

    async fn list_item(&self, trainer: Trainer) -> Result<TrainerListItem, TrainerError> {
        let (rating, photo_url) = futures::join!(
            self.ratings.summary(trainer.user_id),
            resolve_photo(self.files.as_ref(), trainer.photo.as_deref()),
        );

        Ok(TrainerListItem::new(trainer, rating?, photo_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use shared_database::ReviewStore;
    use shared_models::review::NewReview;
    use shared_utils::test_utils::{StaticFileResolver, TestContext};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn registration(user_id: serde_json::Value) -> RegisterTrainerRequest {
        RegisterTrainerRequest {
            user_id: Some(user_id),
            name: Some("Anna".to_string()),
            phone: Some("+79990001122".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_and_duplicate() {
        let ctx = TestContext::new().await;
        let service = TrainerService::new(&ctx.state);

        service.register(registration(json!(42))).await.unwrap();
        assert_matches!(service.register(registration(json!("42"))).await, Err(TrainerError::AlreadyRegistered));
    }

    #[tokio::test]
    async fn test_register_missing_and_invalid_fields() {
        let ctx = TestContext::new().await;
        let service = TrainerService::new(&ctx.state);

        let no_phone = RegisterTrainerRequest {
            phone: Some(String::new()),
            ..registration(json!(42))
        };
        assert_matches!(service.register(no_phone).await, Err(TrainerError::MissingFields));
        assert_matches!(service.register(registration(json!(0))).await, Err(TrainerError::MissingFields));
        assert_matches!(
            service.register(registration(json!("forty-two"))).await,
            Err(TrainerError::InvalidField("user_id"))
        );
    }

    #[tokio::test]
    async fn test_status_of_unknown_user() {
        let ctx = TestContext::new().await;
        let service = TrainerService::new(&ctx.state);

        assert_eq!(service.status(7, day(2024, 1, 1)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_status_reports_stale_flag_and_live_check() {
        let ctx = TestContext::new().await;
        ctx.seed_active_trainer(42, "Anna", day(2024, 1, 1), 30).await;
        let service = TrainerService::new(&ctx.state);

        let status = service.status(42, day(2024, 3, 1)).await.unwrap().unwrap();
        assert!(status.registered);
        assert!(status.is_active);
        assert!(!status.subscription_active);
        assert_eq!(status.subscription_end, Some(day(2024, 1, 31)));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let files = StaticFileResolver::default().with("AgACAgIAAxk", "https://files.test/anna.jpg");
        let ctx = TestContext::with_files(files).await;
        ctx.seed_trainer(42, "Anna").await;
        let service = TrainerService::new(&ctx.state);

        service
            .update_profile(UpdateProfileRequest {
                user_id: Some(json!(42)),
                specialty: Some("Yoga".to_string()),
                photo: Some("AgACAgIAAxk".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let status = service.status(42, day(2024, 1, 1)).await.unwrap().unwrap();
        assert_eq!(status.specialty.as_deref(), Some("Yoga"));
        assert_eq!(status.description, None);
        assert_eq!(status.photo_url.as_deref(), Some("https://files.test/anna.jpg"));
    }

    #[tokio::test]
    async fn test_update_profile_of_unknown_trainer() {
        let ctx = TestContext::new().await;
        let service = TrainerService::new(&ctx.state);

        let unknown = UpdateProfileRequest {
            user_id: Some(json!(99)),
            description: Some("Coach".to_string()),
            ..Default::default()
        };
        assert_matches!(service.update_profile(unknown).await, Err(TrainerError::NotFound));

        // Nothing to change is accepted even for an unknown trainer.
        let empty = UpdateProfileRequest {
            user_id: Some(json!(99)),
            ..Default::default()
        };
        assert_matches!(service.update_profile(empty).await, Ok(()));
    }

    #[tokio::test]
    async fn test_listing_hides_inactive_and_expired() {
        let ctx = TestContext::new().await;
        let today = day(2024, 6, 1);
        ctx.seed_active_trainer(1, "Anna", today, 10).await;
        ctx.seed_active_trainer(2, "Boris", day(2024, 1, 1), 30).await;
        ctx.seed_trainer(3, "Vera").await;
        let service = TrainerService::new(&ctx.state);

        let trainers = service.list_visible(None, today).await.unwrap();
        let ids: Vec<i64> = trainers.iter().map(|t| t.user_id).collect();
        assert_eq!(ids, vec![1]);

        assert_matches!(service.visible_detail(2, today).await, Err(TrainerError::NotFound));
        assert_matches!(service.visible_detail(3, today).await, Err(TrainerError::NotFound));
    }

    #[tokio::test]
    async fn test_listing_includes_rating() {
        let ctx = TestContext::new().await;
        let today = day(2024, 6, 1);
        ctx.seed_active_trainer(1, "Anna", today, 10).await;
        for rating in [5, 4, 4] {
            ctx.store()
                .insert_review(NewReview {
                    trainer_id: 1,
                    user_id: 500,
                    user_name: "Client".to_string(),
                    rating,
                    text: String::new(),
                })
                .await
                .unwrap();
        }
        let service = TrainerService::new(&ctx.state);

        let trainers = service.list_visible(Some("  "), today).await.unwrap();
        assert_eq!(trainers.len(), 1);
        assert_eq!(trainers[0].rating_avg, 4.3);
        assert_eq!(trainers[0].review_count, 3);

        let detail = service.visible_detail(1, today).await.unwrap();
        assert_eq!(detail.review_count, 3);
        assert_eq!(detail.photo_url, None);
    }
}
