use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use http::{header, Method, Request};
use serde_json::Value;

use shared_config::AppConfig;
use shared_database::{Database, ScheduleStore, Store, TrainerStore};
use shared_models::schedule::NewScheduleSlot;
use shared_models::trainer::NewTrainer;

use crate::files::FileUrlResolver;
use crate::state::AppState;

pub struct TestConfig {
    pub telegram_bot_token: String,
    pub telegram_api_base_url: String,
    pub subscription_days: i64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            telegram_bot_token: "test-bot-token".to_string(),
            telegram_api_base_url: "http://localhost:8081".to_string(),
            subscription_days: 30,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            telegram_bot_token: self.telegram_bot_token.clone(),
            telegram_api_base_url: self.telegram_api_base_url.clone(),
            subscription_days: self.subscription_days,
            ..AppConfig::default()
        }
    }
}

/// Resolves file references from a fixed table; unknown references are `None`.
#[derive(Default)]
pub struct StaticFileResolver {
    urls: HashMap<String, String>,
}

impl StaticFileResolver {
    pub fn with(mut self, file_id: &str, url: &str) -> Self {
        self.urls.insert(file_id.to_string(), url.to_string());
        self
    }
}

#[async_trait]
impl FileUrlResolver for StaticFileResolver {
    async fn resolve_url(&self, file_id: &str) -> Option<String> {
        self.urls.get(file_id).cloned()
    }
}

/// A fresh in-memory database plus state wired around it.
pub struct TestContext {
    pub database: Database,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_files(StaticFileResolver::default()).await
    }

    pub async fn with_files(files: StaticFileResolver) -> Self {
        let database = Database::in_memory()
            .await
            .expect("in-memory database should open");
        let state = Arc::new(AppState::new(
            TestConfig::default().to_app_config(),
            Arc::new(database.clone()),
            Arc::new(files),
        ));

        Self { database, state }
    }

    pub fn store(&self) -> &dyn Store {
        &self.database
    }

    pub async fn seed_trainer(&self, user_id: i64, name: &str) {
        self.database
            .insert_trainer(NewTrainer {
                user_id,
                name: name.to_string(),
                phone: format!("+1555{:04}", user_id),
            })
            .await
            .expect("trainer should insert");
    }

    /// Registers a trainer whose subscription runs for another `days` days.
    pub async fn seed_active_trainer(&self, user_id: i64, name: &str, today: NaiveDate, days: i64) {
        self.seed_trainer(user_id, name).await;
        self.database
            .activate_subscription(user_id, today + Duration::days(days))
            .await
            .expect("subscription should activate");
    }

    pub async fn seed_slot(&self, trainer_id: i64, day_of_week: i64, time: &str, max_clients: i64) -> i64 {
        self.database
            .insert_slot(NewScheduleSlot {
                trainer_id,
                day_of_week,
                time: time.to_string(),
                max_clients,
            })
            .await
            .expect("slot should insert")
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

pub async fn read_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&body).expect("body should be JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default().to_app_config();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.subscription_days, 30);
        assert!(config.is_telegram_configured());
    }

    #[tokio::test]
    async fn test_static_resolver() {
        let files = StaticFileResolver::default().with("photo-1", "https://files.test/1.jpg");

        assert_eq!(files.resolve_url("photo-1").await.as_deref(), Some("https://files.test/1.jpg"));
        assert_eq!(files.resolve_url("photo-2").await, None);
    }

    #[tokio::test]
    async fn test_context_seeds_visible_trainer() {
        let ctx = TestContext::new().await;
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ctx.seed_active_trainer(3, "Vera", today, 30).await;

        let trainer = ctx.store().find_visible_trainer(3, today).await.unwrap();
        assert_eq!(trainer.map(|t| t.name), Some("Vera".to_string()));
    }
}
