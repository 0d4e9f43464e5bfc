use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{BookingStore, Store};
use shared_models::booking::{Admission, NewBooking};
use shared_utils::dates::parse_iso_date;
use shared_utils::state::AppState;
use shared_utils::validation::{as_int, is_supplied, is_supplied_text};

use crate::models::{BookingError, BookingRequest};

/// Capacity-checked booking of a slot on a concrete date.
pub struct AdmissionService {
    store: Arc<dyn Store>,
}

impl AdmissionService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
        }
    }

    /// Preconditions are checked in a fixed order: required fields, date,
    /// slot existence, capacity. The last two and the insert happen in the
    /// store as a single step.
    pub async fn book(&self, request: BookingRequest) -> Result<i64, BookingError> {
        let booking = Self::validate(request)?;
        let (trainer_id, date, time) = (
            booking.trainer_id,
            booking.booking_date,
            booking.booking_time.clone(),
        );

        match self.store.admit_booking(booking).await? {
            Admission::Admitted { booking_id } => {
                info!(
                    "Booking {} created for trainer {} on {} at {}",
                    booking_id, trainer_id, date, time
                );
                Ok(booking_id)
            }
            Admission::SlotNotFound => {
                debug!("No slot for trainer {} on {} at {}", trainer_id, date, time);
                Err(BookingError::SlotNotFound)
            }
            Admission::SlotFull => {
                debug!("Slot full for trainer {} on {} at {}", trainer_id, date, time);
                Err(BookingError::SlotFull)
            }
        }
    }

    fn validate(request: BookingRequest) -> Result<NewBooking, BookingError> {
        let supplied = is_supplied(request.trainer_id.as_ref())
            && [
                request.date.as_deref(),
                request.time.as_deref(),
                request.client_name.as_deref(),
                request.client_phone.as_deref(),
            ]
            .into_iter()
            .all(is_supplied_text);
        if !supplied {
            return Err(BookingError::MissingFields);
        }

        let trainer_id = request
            .trainer_id
            .as_ref()
            .and_then(as_int)
            .ok_or(BookingError::InvalidField("trainer_id"))?;

        let booking_date = request
            .date
            .as_deref()
            .and_then(parse_iso_date)
            .ok_or(BookingError::InvalidDate)?;

        let telegram_id = match request.telegram_id {
            Some(ref value) if is_supplied(Some(value)) => {
                Some(as_int(value).ok_or(BookingError::InvalidField("telegram_id"))?)
            }
            _ => None,
        };

        Ok(NewBooking {
            trainer_id,
            client_name: request.client_name.unwrap_or_default(),
            client_phone: request.client_phone.unwrap_or_default(),
            telegram_id,
            booking_date,
            booking_time: request.time.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use shared_utils::test_utils::TestContext;

    fn request(date: &str, time: &str) -> BookingRequest {
        BookingRequest {
            trainer_id: Some(json!(1)),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
            client_name: Some("Ivan".to_string()),
            client_phone: Some("+79991234567".to_string()),
            telegram_id: Some(json!(777)),
        }
    }

    #[tokio::test]
    async fn test_capacity_two_on_monday() {
        let ctx = TestContext::new().await;
        ctx.seed_trainer(1, "Anna").await;
        ctx.seed_slot(1, 1, "10:00", 2).await;
        let service = AdmissionService::new(&ctx.state);

        let first = service.book(request("2024-01-01", "10:00")).await.unwrap();
        let second = service.book(request("2024-01-01", "10:00")).await.unwrap();
        assert_ne!(first, second);

        assert_matches!(service.book(request("2024-01-01", "10:00")).await, Err(BookingError::SlotFull));
    }

    #[tokio::test]
    async fn test_missing_template_is_slot_not_found() {
        let ctx = TestContext::new().await;
        ctx.seed_slot(1, 1, "10:00", 2).await;
        let service = AdmissionService::new(&ctx.state);

        // Tuesday has no template, and Monday has none at 11:00.
        assert_matches!(service.book(request("2024-01-02", "10:00")).await, Err(BookingError::SlotNotFound));
        assert_matches!(service.book(request("2024-01-01", "11:00")).await, Err(BookingError::SlotNotFound));
    }

    #[tokio::test]
    async fn test_precondition_order() {
        let ctx = TestContext::new().await;
        let service = AdmissionService::new(&ctx.state);

        let missing = BookingRequest {
            client_phone: Some(String::new()),
            date: Some("not-a-date".to_string()),
            ..request("2024-01-01", "10:00")
        };
        assert_matches!(service.book(missing).await, Err(BookingError::MissingFields));

        let zero_trainer = BookingRequest {
            trainer_id: Some(json!(0)),
            ..request("2024-01-01", "10:00")
        };
        assert_matches!(service.book(zero_trainer).await, Err(BookingError::MissingFields));

        assert_matches!(service.book(request("2024-02-30", "10:00")).await, Err(BookingError::InvalidDate));
    }

    #[tokio::test]
    async fn test_optional_telegram_id() {
        let ctx = TestContext::new().await;
        ctx.seed_slot(1, 1, "10:00", 5).await;
        let service = AdmissionService::new(&ctx.state);

        let anonymous = BookingRequest {
            telegram_id: None,
            ..request("2024-01-01", "10:00")
        };
        let booking_id = service.book(anonymous).await.unwrap();
        let booking = ctx.store().find_booking(booking_id).await.unwrap().unwrap();
        assert_eq!(booking.telegram_id, None);

        let bogus = BookingRequest {
            telegram_id: Some(json!("@ivan")),
            ..request("2024-01-01", "10:00")
        };
        assert_matches!(service.book(bogus).await, Err(BookingError::InvalidField("telegram_id")));
    }
}
