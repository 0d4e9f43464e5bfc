use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use shared_models::schedule::{iso_weekday, NewScheduleSlot, ScheduleSlot, SlotOccupancy};

use crate::sqlite::Database;
use crate::store::{ScheduleStore, StoreResult};

#[async_trait]
impl ScheduleStore for Database {
    async fn insert_slot(&self, slot: NewScheduleSlot) -> StoreResult<i64> {
        debug!(
            "Adding slot for trainer {} on day {} at {}",
            slot.trainer_id, slot.day_of_week, slot.time
        );

        let result = sqlx::query(
            "INSERT INTO schedule (trainer_id, day_of_week, time, max_clients) VALUES (?, ?, ?, ?)",
        )
        .bind(slot.trainer_id)
        .bind(slot.day_of_week)
        .bind(&slot.time)
        .bind(slot.max_clients)
        .execute(self.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_slots(&self, trainer_id: i64) -> StoreResult<Vec<ScheduleSlot>> {
        let slots = sqlx::query_as::<_, ScheduleSlot>(
            r#"
            SELECT id, trainer_id, day_of_week, time, max_clients
            FROM schedule
            WHERE trainer_id = ?
            ORDER BY day_of_week, time
            "#,
        )
        .bind(trainer_id)
        .fetch_all(self.pool())
        .await?;

        Ok(slots)
    }

    async fn delete_slot(&self, slot_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM schedule WHERE id = ?")
            .bind(slot_id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn slot_occupancy(&self, trainer_id: i64, date: NaiveDate) -> StoreResult<Vec<SlotOccupancy>> {
        let slots = sqlx::query_as::<_, SlotOccupancy>(
            r#"
            SELECT
                s.id,
                s.time,
                s.max_clients,
                (
                    SELECT COUNT(*) FROM bookings b
                    WHERE b.trainer_id = s.trainer_id
                      AND b.booking_date = ?2
                      AND b.booking_time = s.time
                      AND b.status = 'active'
                ) AS booked
            FROM schedule s
            WHERE s.trainer_id = ?1 AND s.day_of_week = ?3
            ORDER BY s.time, s.id
            "#,
        )
        .bind(trainer_id)
        .bind(date)
        .bind(iso_weekday(date))
        .fetch_all(self.pool())
        .await?;

        Ok(slots)
    }
}
