use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use shared_models::booking::{Admission, Booking, BookingStatus, ClientBooking, NewBooking};
use shared_models::schedule::iso_weekday;

use crate::sqlite::Database;
use crate::store::{BookingStore, StoreResult};

const BOOKING_COLUMNS: &str =
    "id, trainer_id, client_name, client_phone, telegram_id, booking_date, booking_time, status";

#[async_trait]
impl BookingStore for Database {
    async fn admit_booking(&self, booking: NewBooking) -> StoreResult<Admission> {
        let weekday = iso_weekday(booking.booking_date);
        let mut tx = self.pool().begin().await?;

        // The matching slot is the lowest-id template for (trainer, weekday,
        // time). The row is only written while the active count on that date
        // is below its capacity, so check and insert are one statement.
        let inserted = sqlx::query(
            r#"
            INSERT INTO bookings
                (trainer_id, client_name, client_phone, telegram_id, booking_date, booking_time, status)
            SELECT ?1, ?2, ?3, ?4, ?5, ?6, 'active'
            FROM schedule s
            WHERE s.id = (
                SELECT MIN(id) FROM schedule
                WHERE trainer_id = ?1 AND day_of_week = ?7 AND time = ?6
            )
            AND (
                SELECT COUNT(*) FROM bookings b
                WHERE b.trainer_id = ?1
                  AND b.booking_date = ?5
                  AND b.booking_time = ?6
                  AND b.status = 'active'
            ) < s.max_clients
            "#,
        )
        .bind(booking.trainer_id)
        .bind(&booking.client_name)
        .bind(&booking.client_phone)
        .bind(booking.telegram_id)
        .bind(booking.booking_date)
        .bind(&booking.booking_time)
        .bind(weekday)
        .execute(&mut *tx)
        .await?;

        if inserted.rows_affected() == 1 {
            let booking_id = inserted.last_insert_rowid();
            tx.commit().await?;
            return Ok(Admission::Admitted { booking_id });
        }

        let slot_id: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM schedule WHERE trainer_id = ? AND day_of_week = ? AND time = ? LIMIT 1",
        )
        .bind(booking.trainer_id)
        .bind(weekday)
        .bind(&booking.booking_time)
        .fetch_optional(&mut *tx)
        .await?;
        tx.rollback().await?;

        debug!(
            "Booking refused for trainer {} on {} at {} (slot exists: {})",
            booking.trainer_id,
            booking.booking_date,
            booking.booking_time,
            slot_id.is_some()
        );

        Ok(match slot_id {
            Some(_) => Admission::SlotFull,
            None => Admission::SlotNotFound,
        })
    }

    async fn find_booking(&self, booking_id: i64) -> StoreResult<Option<Booking>> {
        let query = format!("SELECT {} FROM bookings WHERE id = ?", BOOKING_COLUMNS);
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(booking_id)
            .fetch_optional(self.pool())
            .await?;

        Ok(booking)
    }

    async fn list_trainer_bookings(
        &self,
        trainer_id: i64,
        date: Option<NaiveDate>,
    ) -> StoreResult<Vec<Booking>> {
        let bookings = match date {
            Some(date) => {
                let query = format!(
                    "SELECT {} FROM bookings WHERE trainer_id = ? AND booking_date = ? AND status = ? ORDER BY booking_time, id",
                    BOOKING_COLUMNS
                );
                sqlx::query_as::<_, Booking>(&query)
                    .bind(trainer_id)
                    .bind(date)
                    .bind(BookingStatus::Active)
                    .fetch_all(self.pool())
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {} FROM bookings WHERE trainer_id = ? AND status = ? ORDER BY booking_date, booking_time, id",
                    BOOKING_COLUMNS
                );
                sqlx::query_as::<_, Booking>(&query)
                    .bind(trainer_id)
                    .bind(BookingStatus::Active)
                    .fetch_all(self.pool())
                    .await?
            }
        };

        Ok(bookings)
    }

    async fn list_client_bookings(&self, telegram_id: i64) -> StoreResult<Vec<ClientBooking>> {
        let bookings = sqlx::query_as::<_, ClientBooking>(
            r#"
            SELECT b.id, b.trainer_id, t.name AS trainer_name, b.booking_date, b.booking_time, b.status
            FROM bookings b
            JOIN trainers t ON b.trainer_id = t.user_id
            WHERE b.telegram_id = ?
            ORDER BY b.booking_date, b.booking_time, b.id
            "#,
        )
        .bind(telegram_id)
        .fetch_all(self.pool())
        .await?;

        Ok(bookings)
    }

    async fn cancel_booking(&self, booking_id: i64) -> StoreResult<Option<i64>> {
        let trainer_id: Option<i64> = sqlx::query_scalar(
            "UPDATE bookings SET status = ? WHERE id = ? RETURNING trainer_id",
        )
        .bind(BookingStatus::Cancelled)
        .bind(booking_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(trainer_id)
    }
}
