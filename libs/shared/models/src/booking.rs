use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub trainer_id: i64,
    pub client_name: String,
    pub client_phone: String,
    pub telegram_id: Option<i64>,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub trainer_id: i64,
    pub client_name: String,
    pub client_phone: String,
    pub telegram_id: Option<i64>,
    pub booking_date: NaiveDate,
    pub booking_time: String,
}

/// Result of the atomic capacity-checked insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted { booking_id: i64 },
    SlotNotFound,
    SlotFull,
}

/// A booking as seen from the client side, joined with the trainer's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ClientBooking {
    pub id: i64,
    pub trainer_id: i64,
    #[serde(rename = "name")]
    pub trainer_name: String,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub status: BookingStatus,
}
