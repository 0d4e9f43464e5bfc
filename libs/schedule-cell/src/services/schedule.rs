use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use shared_database::{ScheduleStore, Store, TrainerStore};
use shared_models::schedule::{is_valid_day, NewScheduleSlot};
use shared_utils::state::AppState;
use shared_utils::validation::{as_int, is_supplied, is_supplied_text};

use crate::models::{CreateSlotRequest, ScheduleError, SlotView, DEFAULT_MAX_CLIENTS};

/// Management of a trainer's weekly slot templates.
pub struct ScheduleService {
    store: Arc<dyn Store>,
}

impl ScheduleService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
        }
    }

    pub async fn list_slots(&self, trainer_id: i64) -> Result<Vec<SlotView>, ScheduleError> {
        debug!("Fetching schedule of trainer {}", trainer_id);

        let slots = self.store.list_slots(trainer_id).await?;
        Ok(slots.into_iter().map(SlotView::from).collect())
    }

    pub async fn add_slot(&self, request: CreateSlotRequest) -> Result<i64, ScheduleError> {
        let slot = Self::validate(request)?;

        if self.store.find_trainer(slot.trainer_id).await?.is_none() {
            return Err(ScheduleError::TrainerNotFound);
        }

        let trainer_id = slot.trainer_id;
        let slot_id = self.store.insert_slot(slot).await?;
        info!("Slot {} added for trainer {}", slot_id, trainer_id);

        Ok(slot_id)
    }

    pub async fn delete_slot(&self, slot_id: i64) -> Result<(), ScheduleError> {
        if !self.store.delete_slot(slot_id).await? {
            return Err(ScheduleError::SlotNotFound);
        }

        info!("Slot {} deleted", slot_id);
        Ok(())
    }

    fn validate(request: CreateSlotRequest) -> Result<NewScheduleSlot, ScheduleError> {
        if !is_supplied(request.user_id.as_ref())
            || !is_supplied(request.day.as_ref())
            || !is_supplied_text(request.time.as_deref())
        {
            return Err(ScheduleError::MissingFields);
        }

        let trainer_id = request
            .user_id
            .as_ref()
            .and_then(as_int)
            .ok_or(ScheduleError::InvalidField("user_id"))?;

        let day_of_week = request
            .day
            .as_ref()
            .and_then(as_int)
            .filter(|day| is_valid_day(*day))
            .ok_or(ScheduleError::InvalidField("day"))?;

        let max_clients = match request.max_clients {
            None | Some(Value::Null) => DEFAULT_MAX_CLIENTS,
            Some(ref value) => as_int(value)
                .filter(|n| *n >= 1)
                .ok_or(ScheduleError::InvalidField("max_clients"))?,
        };

        Ok(NewScheduleSlot {
            trainer_id,
            day_of_week,
            time: request.time.unwrap_or_default(),
            max_clients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use shared_utils::test_utils::TestContext;

    fn slot(day: Value, max_clients: Option<Value>) -> CreateSlotRequest {
        CreateSlotRequest {
            user_id: Some(json!(1)),
            day: Some(day),
            time: Some("10:00".to_string()),
            max_clients,
        }
    }

    #[tokio::test]
    async fn test_add_and_list_slots() {
        let ctx = TestContext::new().await;
        ctx.seed_trainer(1, "Anna").await;
        let service = ScheduleService::new(&ctx.state);

        service.add_slot(slot(json!(3), Some(json!(2)))).await.unwrap();
        service.add_slot(slot(json!("1"), None)).await.unwrap();

        let slots = service.list_slots(1).await.unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!((slots[0].day, slots[0].day_name, slots[0].max_clients), (1, "Mon", 1));
        assert_eq!((slots[1].day, slots[1].day_name, slots[1].max_clients), (3, "Wed", 2));
    }

    #[tokio::test]
    async fn test_slot_validation() {
        let ctx = TestContext::new().await;
        ctx.seed_trainer(1, "Anna").await;
        let service = ScheduleService::new(&ctx.state);

        assert_matches!(service.add_slot(slot(json!(8), None)).await, Err(ScheduleError::InvalidField("day")));
        assert_matches!(service.add_slot(slot(json!(0), None)).await, Err(ScheduleError::MissingFields));
        assert_matches!(
            service.add_slot(slot(json!(2), Some(json!(0)))).await,
            Err(ScheduleError::InvalidField("max_clients"))
        );
        assert_matches!(
            service.add_slot(CreateSlotRequest { time: None, ..slot(json!(2), None) }).await,
            Err(ScheduleError::MissingFields)
        );
    }

    #[tokio::test]
    async fn test_slot_for_unknown_trainer() {
        let ctx = TestContext::new().await;
        let service = ScheduleService::new(&ctx.state);

        assert_matches!(service.add_slot(slot(json!(1), None)).await, Err(ScheduleError::TrainerNotFound));
    }

    #[tokio::test]
    async fn test_delete_slot() {
        let ctx = TestContext::new().await;
        ctx.seed_trainer(1, "Anna").await;
        let slot_id = ctx.seed_slot(1, 1, "10:00", 1).await;
        let service = ScheduleService::new(&ctx.state);

        service.delete_slot(slot_id).await.unwrap();
        assert!(service.list_slots(1).await.unwrap().is_empty());
        assert_matches!(service.delete_slot(slot_id).await, Err(ScheduleError::SlotNotFound));
    }
}
