use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::services::game_locks::GameLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for tests that never touch storage)
    db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Per-game mutexes serializing round submission and King selection
    pub game_locks: GameLocks,
}

impl AppState {
    /// Create a new AppState with the given database connection and security config
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
            game_locks: GameLocks::default(),
        }
    }

    /// Create a new AppState without a database connection
    pub fn new_without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            game_locks: GameLocks::default(),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
