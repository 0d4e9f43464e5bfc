use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_database::DatabaseError;
use shared_models::booking::Booking;
use shared_models::error::AppError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    pub trainer_id: Option<Value>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub telegram_id: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainerBookingsQuery {
    pub user_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub status: &'static str,
    pub booking_id: i64,
}

/// An active booking on the trainer's agenda.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerBookingView {
    pub id: i64,
    pub client_name: String,
    pub client_phone: String,
    pub date: NaiveDate,
    pub time: String,
}

impl From<Booking> for TrainerBookingView {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            client_name: booking.client_name,
            client_phone: booking.client_phone,
            date: booking.booking_date,
            time: booking.booking_time,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Invalid {0}")]
    InvalidField(&'static str),

    #[error("Invalid date")]
    InvalidDate,

    #[error("Slot not found")]
    SlotNotFound,

    #[error("No free slots")]
    SlotFull,

    #[error("Booking not found")]
    BookingNotFound,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<BookingError> for AppError {
    fn from(error: BookingError) -> Self {
        match error {
            BookingError::MissingFields => AppError::MissingFields(error.to_string()),
            BookingError::InvalidField(_) | BookingError::InvalidDate => {
                AppError::InvalidInput(error.to_string())
            }
            BookingError::SlotNotFound | BookingError::BookingNotFound => {
                AppError::NotFound(error.to_string())
            }
            BookingError::SlotFull => AppError::Conflict(error.to_string()),
            BookingError::Database(e) => e.into(),
        }
    }
}
