use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state handed to every route handler.
#[derive(Debug)]
pub struct AppState {
    config: AppConfig,
    db: Option<SqlitePool>,
}

impl AppState {
    pub fn new(config: AppConfig, db: Option<SqlitePool>) -> Arc<Self> {
        Arc::new(Self { config, db })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The pipeline log pool, when a database was configured at startup.
    pub fn db(&self) -> Option<&SqlitePool> {
        self.db.as_ref()
    }
}
