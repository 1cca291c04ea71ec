//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here so services only
//! ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Prefix adapters use for optimistic lock failures, followed by a JSON payload
/// `{"expected":N,"actual":M}`.
pub const OPTIMISTIC_LOCK_PREFIX: &str = "OPTIMISTIC_LOCK:";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract the column list from SQLite "UNIQUE constraint failed: t.a, t.b" messages.
fn extract_sqlite_columns(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    let rest = &error_msg[start..];
    let end = rest.find(['\n', '"', ')']).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

fn map_sqlite_columns_to_conflict(columns: &str) -> Option<(ConflictKind, &'static str)> {
    match columns {
        "rounds.game_id, rounds.round_number" => Some((
            ConflictKind::RoundNumberTaken,
            "Round number already recorded for this game",
        )),
        "users.sub" => Some((
            ConflictKind::Other("UniqueSub".into()),
            "User already exists",
        )),
        "game_players.game_id, game_players.seat_position"
        | "game_players.game_id, game_players.user_id" => Some((
            ConflictKind::Other("SeatTaken".into()),
            "Seat already assigned",
        )),
        _ => None,
    }
}

fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_rounds_game_round") {
        return Some((
            ConflictKind::RoundNumberTaken,
            "Round number already recorded for this game",
        ));
    }
    if error_msg.contains("ux_users_sub") {
        return Some((
            ConflictKind::Other("UniqueSub".into()),
            "User already exists",
        ));
    }
    if error_msg.contains("ux_game_players_game_seat")
        || error_msg.contains("ux_game_players_game_user")
    {
        return Some((
            ConflictKind::Other("SeatTaken".into()),
            "Seat already assigned",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::RecordNotInserted | sea_orm::DbErr::RecordNotUpdated => {
            warn!(trace_id = %trace_id, error = %error_msg, "Write affected no rows");
            return DomainError::infra(InfraErrorKind::Persistence, "Write did not apply");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(OPTIMISTIC_LOCK_PREFIX) => {
            #[derive(serde::Deserialize)]
            struct LockInfo {
                expected: i32,
                actual: i32,
            }

            let payload = &msg[OPTIMISTIC_LOCK_PREFIX.len()..];
            if let Ok(info) = serde_json::from_str::<LockInfo>(payload) {
                warn!(
                    trace_id = %trace_id,
                    expected = info.expected,
                    actual = info.actual,
                    "Optimistic lock conflict detected"
                );
                return DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game was modified concurrently (expected version {}, actual version {}). Please refresh and retry.",
                        info.expected, info.actual
                    ),
                );
            }

            warn!(trace_id = %trace_id, "Optimistic lock conflict detected (version info unavailable)");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Game was modified concurrently; please retry",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, error = %error_msg, "Unique constraint violation");

        if let Some(columns) = extract_sqlite_columns(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_columns_to_conflict(columns) {
                return DomainError::conflict(kind, detail);
            }
        }
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, error = %error_msg, "Foreign key constraint violation");
        return DomainError::infra(
            InfraErrorKind::Persistence,
            "Foreign key constraint violation",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, error = %error_msg, "Unhandled database error");
    DomainError::infra(InfraErrorKind::Persistence, "Database operation failed")
}
