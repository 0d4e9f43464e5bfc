pub mod subscription;
pub mod trainer;

pub use subscription::SubscriptionService;
pub use trainer::TrainerService;
