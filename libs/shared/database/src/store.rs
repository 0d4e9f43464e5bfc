use async_trait::async_trait;
use chrono::NaiveDate;

use shared_models::booking::{Admission, Booking, ClientBooking, NewBooking};
use shared_models::review::{NewReview, RatingSummary, Review};
use shared_models::schedule::{NewScheduleSlot, ScheduleSlot, SlotOccupancy};
use shared_models::trainer::{NewTrainer, ProfileChanges, Trainer};

use crate::error::DatabaseError;

pub type StoreResult<T> = Result<T, DatabaseError>;

#[async_trait]
pub trait TrainerStore: Send + Sync {
    /// Fails with `DatabaseError::Duplicate` when `user_id` is taken.
    async fn insert_trainer(&self, trainer: NewTrainer) -> StoreResult<i64>;

    async fn find_trainer(&self, user_id: i64) -> StoreResult<Option<Trainer>>;

    /// Returns the number of rows touched. Executes nothing for empty changes.
    async fn update_profile(&self, user_id: i64, changes: &ProfileChanges) -> StoreResult<u64>;

    /// Sets `is_active` and the end date. Returns false if no trainer matched.
    async fn activate_subscription(&self, user_id: i64, until: NaiveDate) -> StoreResult<bool>;

    /// Trainers whose flag is set and whose subscription covers `today`,
    /// optionally filtered by a name/specialty substring.
    async fn list_visible_trainers(
        &self,
        search: Option<&str>,
        today: NaiveDate,
    ) -> StoreResult<Vec<Trainer>>;

    async fn find_visible_trainer(&self, user_id: i64, today: NaiveDate) -> StoreResult<Option<Trainer>>;
}

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn insert_slot(&self, slot: NewScheduleSlot) -> StoreResult<i64>;

    /// Ordered by day of week, then time.
    async fn list_slots(&self, trainer_id: i64) -> StoreResult<Vec<ScheduleSlot>>;

    /// Returns false if the slot did not exist.
    async fn delete_slot(&self, slot_id: i64) -> StoreResult<bool>;

    /// Every template for the weekday of `date` with its active booking count
    /// on that exact date.
    async fn slot_occupancy(&self, trainer_id: i64, date: NaiveDate) -> StoreResult<Vec<SlotOccupancy>>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Capacity check and insert as one atomic step.
    async fn admit_booking(&self, booking: NewBooking) -> StoreResult<Admission>;

    async fn find_booking(&self, booking_id: i64) -> StoreResult<Option<Booking>>;

    /// Active bookings only.
    async fn list_trainer_bookings(
        &self,
        trainer_id: i64,
        date: Option<NaiveDate>,
    ) -> StoreResult<Vec<Booking>>;

    async fn list_client_bookings(&self, telegram_id: i64) -> StoreResult<Vec<ClientBooking>>;

    /// Flips the booking to cancelled and returns its trainer id, or `None`
    /// when the booking does not exist.
    async fn cancel_booking(&self, booking_id: i64) -> StoreResult<Option<i64>>;
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn insert_review(&self, review: NewReview) -> StoreResult<i64>;

    /// Newest first.
    async fn list_reviews(&self, trainer_id: i64) -> StoreResult<Vec<Review>>;

    async fn rating_summary(&self, trainer_id: i64) -> StoreResult<RatingSummary>;
}

/// The full capability set a request handler may use.
pub trait Store: TrainerStore + ScheduleStore + BookingStore + ReviewStore {}

impl<T> Store for T where T: TrainerStore + ScheduleStore + BookingStore + ReviewStore {}
