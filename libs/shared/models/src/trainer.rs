use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Trainer {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub specialty: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub subscription_end: Option<NaiveDate>,
    pub is_active: bool,
}

impl Trainer {
    /// Live expiry check: the subscription covers `today` inclusive.
    pub fn subscription_active_on(&self, today: NaiveDate) -> bool {
        self.subscription_end.is_some_and(|end| end >= today)
    }

    /// Whether clients may see this trainer on `today`. The stored flag alone
    /// is not enough because nothing clears it once the end date passes.
    pub fn is_visible_on(&self, today: NaiveDate) -> bool {
        self.is_active && self.subscription_active_on(today)
    }
}

#[derive(Debug, Clone)]
pub struct NewTrainer {
    pub user_id: i64,
    pub name: String,
    pub phone: String,
}

/// Fields of a partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub specialty: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.specialty.is_none() && self.description.is_none() && self.photo.is_none()
    }
}
