use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use shared_database::{ScheduleStore, Store};
use shared_models::schedule::AvailableSlot;
use shared_utils::dates::parse_iso_date;
use shared_utils::state::AppState;

use crate::models::ScheduleError;

/// Resolves weekly slot templates against a calendar date.
pub struct AvailabilityService {
    store: Arc<dyn Store>,
}

impl AvailabilityService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
        }
    }

    /// Slots on `date` (`YYYY-MM-DD`) that still have room, ordered by time.
    pub async fn available_slots(&self, trainer_id: i64, date: &str) -> Result<Vec<AvailableSlot>, ScheduleError> {
        let date = parse_iso_date(date).ok_or(ScheduleError::InvalidDate)?;
        self.available_on(trainer_id, date).await
    }

    pub async fn available_on(&self, trainer_id: i64, date: NaiveDate) -> Result<Vec<AvailableSlot>, ScheduleError> {
        let occupancy = self.store.slot_occupancy(trainer_id, date).await?;
        debug!("{} templates for trainer {} on {}", occupancy.len(), trainer_id, date);

        Ok(occupancy
            .into_iter()
            .filter(|slot| slot.free() > 0)
            .map(|slot| AvailableSlot {
                free: slot.free(),
                id: slot.id,
                time: slot.time,
            })
            .collect())
    }
}
