use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{BookingStore, Store};
use shared_models::booking::ClientBooking;
use shared_utils::dates::parse_iso_date;
use shared_utils::state::AppState;

use crate::models::{BookingError, TrainerBookingView};

/// Booking lists for both sides, and cancellation.
pub struct BookingService {
    store: Arc<dyn Store>,
}

impl BookingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: Arc::clone(&state.store),
        }
    }

    /// Active bookings of a trainer, optionally restricted to one date.
    pub async fn trainer_bookings(
        &self,
        trainer_id: i64,
        date: Option<&str>,
    ) -> Result<Vec<TrainerBookingView>, BookingError> {
        let date = match date.filter(|d| !d.is_empty()) {
            Some(raw) => Some(parse_iso_date(raw).ok_or(BookingError::InvalidDate)?),
            None => None,
        };

        let bookings = self.store.list_trainer_bookings(trainer_id, date).await?;
        debug!("{} active bookings for trainer {}", bookings.len(), trainer_id);

        Ok(bookings.into_iter().map(TrainerBookingView::from).collect())
    }

    pub async fn client_bookings(&self, telegram_id: i64) -> Result<Vec<ClientBooking>, BookingError> {
        Ok(self.store.list_client_bookings(telegram_id).await?)
    }

    /// Cancelling an already cancelled booking succeeds again.
    pub async fn cancel(&self, booking_id: i64) -> Result<(), BookingError> {
        let trainer_id = self
            .store
            .cancel_booking(booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound)?;

        info!("Booking {} of trainer {} cancelled", booking_id, trainer_id);
        Ok(())
    }
}
