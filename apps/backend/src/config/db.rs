use std::env;

use crate::error::AppError;

/// Which database backend to connect to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL, configured from `POSTGRES_*` / `APP_DB*` variables
    Postgres,
    /// SQLite file at `SQLITE_DB_PATH`
    SqliteFile,
    /// Private in-memory SQLite database (tests, demos)
    SqliteMemory,
}

impl DbKind {
    /// Read `DB_KIND` (defaults to `postgres`).
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(DbKind::Postgres),
        }
    }
}

impl std::str::FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unsupported DB_KIND '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Builds a database URL from environment variables for the given backend
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = host();
            let port = port();
            let db_name = must_var("APP_DB")?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = must_var("SQLITE_DB_PATH")?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
