use std::sync::Arc;

use shared_config::AppConfig;
use shared_database::{Database, Store};

use crate::files::{FileUrlResolver, TelegramFileResolver};

/// Everything a request handler can reach. Handlers see the store only
/// through its capability traits, so tests can swap in any `Store`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn Store>,
    pub files: Arc<dyn FileUrlResolver>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn Store>, files: Arc<dyn FileUrlResolver>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            files,
        }
    }

    /// Production wiring: the SQLite store and the Telegram file resolver.
    pub fn with_database(config: AppConfig, database: Database) -> Self {
        let files = Arc::new(TelegramFileResolver::new(&config));
        Self::new(config, Arc::new(database), files)
    }
}
