use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Maps a unique-constraint violation to `Duplicate`, passing any other
    /// failure through unchanged.
    pub(crate) fn from_insert(error: sqlx::Error, what: &str) -> Self {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                DatabaseError::Duplicate(what.to_string())
            }
            _ => DatabaseError::Sqlx(error),
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Duplicate(what) => AppError::Conflict(what),
            DatabaseError::Sqlx(e) => AppError::Database(e.to_string()),
        }
    }
}
