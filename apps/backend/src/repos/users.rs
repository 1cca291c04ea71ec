//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub sub: String,
    pub display_name: String,
    pub email: Option<String>,
    pub profile_completed: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            sub: model.sub,
            display_name: model.display_name,
            email: model.email,
            profile_completed: model.profile_completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn require_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    find_user_by_id(conn, user_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::User, format!("User {user_id} not found"))
    })
}

pub async fn find_user_by_sub<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_sub(conn, sub).await?;
    Ok(user.map(User::from))
}

pub async fn find_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_ids: &[i64],
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::find_many(conn, user_ids).await?;
    Ok(users.into_iter().map(User::from).collect())
}

/// All users ordered by display name.
pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list_by_display_name(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
    display_name: &str,
    email: Option<&str>,
) -> Result<User, DomainError> {
    let mut dto = users_adapter::UserCreate::new(sub, display_name);
    if let Some(email) = email {
        dto = dto.with_email(email);
    }
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

/// Fetch the user for `sub`, creating the profile on first sight.
pub async fn ensure_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
    display_name: &str,
    email: Option<&str>,
) -> Result<(User, bool), DomainError> {
    let mut dto = users_adapter::UserCreate::new(sub, display_name);
    if let Some(email) = email {
        dto = dto.with_email(email);
    }
    let (user, inserted) = users_adapter::ensure_user_by_sub(conn, dto).await?;
    Ok((User::from(user), inserted))
}

/// Rename the user and mark their profile completed.
pub async fn update_display_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    display_name: &str,
) -> Result<User, DomainError> {
    match users_adapter::update_display_name(conn, user_id, display_name).await {
        Ok(user) => Ok(User::from(user)),
        Err(sea_orm::DbErr::RecordNotFound(_)) => Err(DomainError::not_found(
            NotFoundKind::User,
            format!("User {user_id} not found"),
        )),
        Err(e) => Err(e.into()),
    }
}
