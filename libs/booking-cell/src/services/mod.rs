pub mod admission;
pub mod bookings;

pub use admission::AdmissionService;
pub use bookings::BookingService;
