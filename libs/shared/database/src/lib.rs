//! SQLite persistence for trainers, weekly schedules, bookings and reviews.
//!
//! Request handlers never see the pool directly; they hold an `Arc<dyn Store>`
//! and call the capability traits defined in [`store`].

mod bookings;
mod reviews;
mod schedule;
mod trainers;

pub mod error;
pub mod sqlite;
pub mod store;

pub use error::DatabaseError;
pub use sqlite::Database;
pub use store::{BookingStore, ReviewStore, ScheduleStore, Store, TrainerStore};
