//! Application state shared across routes

use std::sync::Arc;

use crate::config::Config;
use crate::store::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        // Connections are opened per operation; this only records where
        let db = Database::new(config.db_path.clone());

        Self { config, db }
    }
}
