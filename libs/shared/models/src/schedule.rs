use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A recurring weekly availability rule for one trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ScheduleSlot {
    pub id: i64,
    pub trainer_id: i64,
    pub day_of_week: i64, // 1 = Monday .. 7 = Sunday
    pub time: String,
    pub max_clients: i64,
}

#[derive(Debug, Clone)]
pub struct NewScheduleSlot {
    pub trainer_id: i64,
    pub day_of_week: i64,
    pub time: String,
    pub max_clients: i64,
}

/// A slot template together with its active booking count on one date.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SlotOccupancy {
    pub id: i64,
    pub time: String,
    pub max_clients: i64,
    pub booked: i64,
}

impl SlotOccupancy {
    pub fn free(&self) -> i64 {
        self.max_clients - self.booked
    }
}

/// A slot template resolved against one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub id: i64,
    pub time: String,
    pub free: i64,
}

pub fn iso_weekday(date: NaiveDate) -> i64 {
    i64::from(date.weekday().number_from_monday())
}

pub fn is_valid_day(day: i64) -> bool {
    (1..=7).contains(&day)
}

pub fn day_name(day: i64) -> &'static str {
    if is_valid_day(day) {
        DAY_NAMES[(day - 1) as usize]
    } else {
        ""
    }
}
