use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Canonical way for handlers and extractors to reach the database.
///
/// Returns `DB_UNAVAILABLE` (503) when the state was built without a database.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state.db().ok_or_else(|| {
        AppError::unavailable(ErrorCode::DbUnavailable, "Database is not configured")
    })
}
