//! SeaORM adapter for rounds and their King's Side rosters.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::{round_kings_side, rounds};

pub mod dto;

pub use dto::RoundCreate;

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = rounds::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        round_number: Set(dto.round_number),
        king_id: Set(dto.king_id),
        town_points: Set(dto.town_points),
        created_by: Set(dto.created_by),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    round.insert(conn).await
}

/// Delete a round and any roster rows already written for it.
pub async fn delete_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<(), sea_orm::DbErr> {
    round_kings_side::Entity::delete_many()
        .filter(round_kings_side::Column::RoundId.eq(round_id))
        .exec(conn)
        .await?;
    rounds::Entity::delete_by_id(round_id).exec(conn).await?;
    Ok(())
}

/// Highest recorded round number, or `None` for a fresh game.
pub async fn max_round_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<i32>, sea_orm::DbErr> {
    let max: Option<Option<i32>> = rounds::Entity::find()
        .select_only()
        .column_as(rounds::Column::RoundNumber.max(), "max_round")
        .filter(rounds::Column::GameId.eq(game_id))
        .into_tuple()
        .one(conn)
        .await?;
    Ok(max.flatten())
}

pub async fn create_roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    game_id: i64,
    user_ids: &[i64],
) -> Result<(), sea_orm::DbErr> {
    if user_ids.is_empty() {
        return Ok(());
    }

    let rows = user_ids.iter().map(|&user_id| round_kings_side::ActiveModel {
        id: NotSet,
        round_id: Set(round_id),
        game_id: Set(game_id),
        user_id: Set(user_id),
    });

    round_kings_side::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

/// Rounds for a game, newest first.
pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::GameId.eq(game_id))
        .order_by_desc(rounds::Column::RoundNumber)
        .all(conn)
        .await
}

/// Roster rows for every round of a game, in insertion order.
pub async fn rosters_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<round_kings_side::Model>, sea_orm::DbErr> {
    round_kings_side::Entity::find()
        .filter(round_kings_side::Column::GameId.eq(game_id))
        .order_by_asc(round_kings_side::Column::RoundId)
        .order_by_asc(round_kings_side::Column::Id)
        .all(conn)
        .await
}
