use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:trainer_booking.db";
pub const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";
pub const DEFAULT_SUBSCRIPTION_DAYS: i64 = 30;
pub const MAX_SUBSCRIPTION_DAYS: i64 = 3650;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub telegram_bot_token: String,
    pub telegram_api_base_url: String,
    pub subscription_days: i64,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: 5,
            telegram_bot_token: String::new(),
            telegram_api_base_url: DEFAULT_TELEGRAM_API_BASE_URL.to_string(),
            subscription_days: DEFAULT_SUBSCRIPTION_DAYS,
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
                    defaults.database_url.clone()
                }),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", defaults.database_max_connections),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .unwrap_or_else(|_| {
                    warn!("TELEGRAM_BOT_TOKEN not set, photo URLs will not be resolved");
                    String::new()
                }),
            telegram_api_base_url: env::var("TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|_| defaults.telegram_api_base_url.clone()),
            subscription_days: subscription_days_or_default(
                parse_var("SUBSCRIPTION_DAYS", defaults.subscription_days),
            ),
            host: env::var("HOST").unwrap_or_else(|_| defaults.host.clone()),
            port: parse_var("PORT", defaults.port),
        };

        if !config.is_telegram_configured() {
            warn!("Application not fully configured - Telegram file lookups disabled");
        }

        config
    }

    pub fn is_telegram_configured(&self) -> bool {
        !self.telegram_bot_token.is_empty() && !self.telegram_api_base_url.is_empty()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Keeps the subscription period within 1..=MAX_SUBSCRIPTION_DAYS.
fn subscription_days_or_default(days: i64) -> i64 {
    if (1..=MAX_SUBSCRIPTION_DAYS).contains(&days) {
        days
    } else {
        warn!(
            "SUBSCRIPTION_DAYS must be between 1 and {}, got {}, using {}",
            MAX_SUBSCRIPTION_DAYS, days, DEFAULT_SUBSCRIPTION_DAYS
        );
        DEFAULT_SUBSCRIPTION_DAYS
    }
}

fn parse_var<T: FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has an invalid value {:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}
