use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::users::{self, User};

/// Ensures a profile exists for the token subject, creating one on first sight.
///
/// Idempotent: repeat calls with the same `sub` return the same user.
pub async fn ensure_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<User, DomainError> {
    if let Some(user) = users::find_user_by_sub(conn, sub).await? {
        debug!(user_id = user.id, "known user");
        return Ok(user);
    }

    let display_name = derive_display_name(name, email, sub);
    let (user, inserted) = users::ensure_user(conn, sub, &display_name, email).await?;
    if inserted {
        info!(user_id = user.id, "user profile created");
    }
    Ok(user)
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    users::list_users(conn).await
}

/// Replace the caller's display name. The name is trimmed and must not be blank.
pub async fn update_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    display_name: &str,
) -> Result<User, DomainError> {
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidDisplayName,
            "Display name is required",
        ));
    }

    let user = users::update_display_name(conn, user_id, display_name).await?;
    info!(user_id = user.id, "profile updated");
    Ok(user)
}

/// Display name from the token's name, else the email local part, else the subject.
fn derive_display_name(name: Option<&str>, email: Option<&str>, sub: &str) -> String {
    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    if let Some(local) = email
        .and_then(|e| e.split('@').next())
        .map(str::trim)
        .filter(|l| !l.is_empty())
    {
        return local.to_string();
    }
    sub.to_string()
}
