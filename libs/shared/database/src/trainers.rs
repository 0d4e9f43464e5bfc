use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite};
use tracing::debug;

use shared_models::trainer::{NewTrainer, ProfileChanges, Trainer};

use crate::error::DatabaseError;
use crate::sqlite::Database;
use crate::store::{StoreResult, TrainerStore};

const TRAINER_COLUMNS: &str =
    "id, user_id, name, phone, specialty, description, photo, subscription_end, is_active";

/// Wraps a search term for `LIKE ... ESCAPE '\'` so `%` and `_` match literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl TrainerStore for Database {
    async fn insert_trainer(&self, trainer: NewTrainer) -> StoreResult<i64> {
        debug!("Inserting trainer {}", trainer.user_id);

        let result = sqlx::query("INSERT INTO trainers (user_id, name, phone) VALUES (?, ?, ?)")
            .bind(trainer.user_id)
            .bind(&trainer.name)
            .bind(&trainer.phone)
            .execute(self.pool())
            .await
            .map_err(|e| DatabaseError::from_insert(e, "User already registered"))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_trainer(&self, user_id: i64) -> StoreResult<Option<Trainer>> {
        let query = format!("SELECT {} FROM trainers WHERE user_id = ?", TRAINER_COLUMNS);
        let trainer = sqlx::query_as::<_, Trainer>(&query)
            .bind(user_id)
            .fetch_optional(self.pool())
            .await?;

        Ok(trainer)
    }

    async fn update_profile(&self, user_id: i64, changes: &ProfileChanges) -> StoreResult<u64> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE trainers SET ");
        let mut columns = builder.separated(", ");
        if let Some(specialty) = &changes.specialty {
            columns.push("specialty = ").push_bind_unseparated(specialty.clone());
        }
        if let Some(description) = &changes.description {
            columns.push("description = ").push_bind_unseparated(description.clone());
        }
        if let Some(photo) = &changes.photo {
            columns.push("photo = ").push_bind_unseparated(photo.clone());
        }
        builder.push(" WHERE user_id = ").push_bind(user_id);

        let result = builder.build().execute(self.pool()).await?;
        Ok(result.rows_affected())
    }

    async fn activate_subscription(&self, user_id: i64, until: NaiveDate) -> StoreResult<bool> {
        let result = sqlx::query("UPDATE trainers SET subscription_end = ?, is_active = 1 WHERE user_id = ?")
            .bind(until)
            .bind(user_id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_visible_trainers(
        &self,
        search: Option<&str>,
        today: NaiveDate,
    ) -> StoreResult<Vec<Trainer>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM trainers WHERE is_active = 1 AND subscription_end >= ",
            TRAINER_COLUMNS
        ));
        builder.push_bind(today);

        if let Some(search) = search.filter(|s| !s.is_empty()) {
            let pattern = like_pattern(search);
            builder
                .push(" AND (name LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR specialty LIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\')");
        }
        builder.push(" ORDER BY id");

        let trainers = builder
            .build_query_as::<Trainer>()
            .fetch_all(self.pool())
            .await?;

        Ok(trainers)
    }

    async fn find_visible_trainer(&self, user_id: i64, today: NaiveDate) -> StoreResult<Option<Trainer>> {
        let query = format!(
            "SELECT {} FROM trainers WHERE user_id = ? AND is_active = 1 AND subscription_end >= ?",
            TRAINER_COLUMNS
        );
        let trainer = sqlx::query_as::<_, Trainer>(&query)
            .bind(user_id)
            .bind(today)
            .fetch_optional(self.pool())
            .await?;

        Ok(trainer)
    }
}
