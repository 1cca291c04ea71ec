//! SeaORM adapter for user repository.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn find_by_sub<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    sub: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Sub.eq(sub))
        .one(conn)
        .await
}

pub async fn find_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_ids: &[i64],
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }
    users::Entity::find()
        .filter(users::Column::Id.is_in(user_ids.iter().copied()))
        .all(conn)
        .await
}

pub async fn list_by_display_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::DisplayName)
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: NotSet,
        sub: Set(dto.sub),
        display_name: Set(dto.display_name),
        email: Set(dto.email),
        profile_completed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await
}

/// Insert the user unless `sub` already exists; returns the row and whether it was created.
pub async fn ensure_user_by_sub<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<(users::Model, bool), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let sub = dto.sub.clone();

    let user_active = users::ActiveModel {
        id: NotSet,
        sub: Set(dto.sub),
        display_name: Set(dto.display_name),
        email: Set(dto.email),
        profile_completed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let rows = users::Entity::insert(user_active)
        .on_conflict(
            OnConflict::column(users::Column::Sub)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    let inserted = rows == 1;
    let user = find_by_sub(conn, &sub)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("users.sub not found".to_string()))?;

    Ok((user, inserted))
}

/// Set the display name and mark the profile completed.
pub async fn update_display_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    display_name: &str,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = users::Entity::update_many()
        .col_expr(users::Column::DisplayName, Expr::val(display_name).into())
        .col_expr(users::Column::ProfileCompleted, Expr::val(true).into())
        .col_expr(users::Column::UpdatedAt, Expr::val(now).into())
        .filter(users::Column::Id.eq(user_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "users.id {user_id} not found"
        )));
    }

    find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("users.id {user_id} not found")))
}
