pub mod booking;
pub mod error;
pub mod review;
pub mod schedule;
pub mod trainer;
