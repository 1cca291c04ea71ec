use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

const PG_CONNECT_ATTEMPTS: u32 = 5;
const PG_CONNECT_INTERVAL_MS: u64 = 500;

fn db_engine(kind: &DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all attempts are used.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection retry succeeded");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(attempt, max_attempts, interval_ms, error = %e, "connection attempt failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Open a connection pool for `kind`. Does NOT run migrations.
///
/// In-memory SQLite gets exactly one pooled connection: every SQLite memory
/// connection is its own database, so the schema must live on the one we hand out.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind.clone())?;

    let mut opt = ConnectOptions::new(url);
    match kind {
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::SqliteFile => {
            opt.min_connections(1).max_connections(4);
        }
        DbKind::Postgres => {
            opt.min_connections(1).max_connections(10);
        }
    }
    opt.acquire_timeout(Duration::from_secs(5)).sqlx_logging(false);

    let conn = if matches!(kind, DbKind::Postgres) {
        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt).await.map_err(|e| {
                        AppError::config(format!("failed to connect to Postgres: {e}"))
                    })
                }
            },
            PG_CONNECT_ATTEMPTS,
            PG_CONNECT_INTERVAL_MS,
        )
        .await?
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| AppError::config(format!("failed to connect to SQLite: {e}")))?
    };

    info!(engine = db_engine(&kind), db_kind = ?kind, "pool=create");
    Ok(conn)
}

/// Single entrypoint used by the server and tests: connect, then migrate up.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    info!(db_kind = ?kind, engine = db_engine(&kind), "bootstrap=start");

    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;

    info!("bootstrap=ready");
    Ok(conn)
}
