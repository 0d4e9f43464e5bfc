pub mod rating;
pub mod review;

pub use rating::RatingService;
pub use review::ReviewService;
