//! SeaORM adapter for game repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

use crate::entities::{game_players, games};
use crate::infra::db_errors::OPTIMISTIC_LOCK_PREFIX;

pub mod dto;

pub use dto::{GameCreate, GameUpdateKing};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Apply an update guarded by `lock_version`, bump the version, then refetch.
///
/// Zero affected rows means either the game is gone (`RecordNotFound`) or the
/// version moved on (`OPTIMISTIC_LOCK:{"expected":..,"actual":..}`).
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    current_lock_version: i32,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::LockVersion.eq(current_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let game = games::Entity::find_by_id(id).one(conn).await?;
        return match game {
            Some(game) => Err(sea_orm::DbErr::Custom(format!(
                "{OPTIMISTIC_LOCK_PREFIX}{{\"expected\":{},\"actual\":{}}}",
                current_lock_version, game.lock_version
            ))),
            None => Err(sea_orm::DbErr::RecordNotFound("Game not found".to_string())),
        };
    }

    require_game(conn, id).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or return RecordNotFound error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_by: Set(dto.created_by),
        current_king_id: Set(None),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game_active.insert(conn).await
}

pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), sea_orm::DbErr> {
    games::Entity::delete_by_id(game_id).exec(conn).await?;
    Ok(())
}

/// Games the user holds a seat in, newest first.
pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .join(
            sea_orm::JoinType::InnerJoin,
            games::Relation::GamePlayers.def(),
        )
        .filter(game_players::Column::UserId.eq(user_id))
        .order_by_desc(games::Column::CreatedAt)
        .order_by_desc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn update_king<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdateKing,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    optimistic_update_then_fetch(conn, dto.id, dto.expected_version, |update| {
        update.col_expr(
            games::Column::CurrentKingId,
            Expr::val(Some(dto.king_id)).into(),
        )
    })
    .await
}
