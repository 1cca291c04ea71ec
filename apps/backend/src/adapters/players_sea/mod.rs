//! SeaORM adapter for seats (`game_players`).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::game_players;

/// Seat a user at `seat_position` with the starting rank.
pub async fn create_seat<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    seat_position: i16,
    starting_level: i16,
) -> Result<game_players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let seat = game_players::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        user_id: Set(user_id),
        seat_position: Set(seat_position),
        current_level: Set(starting_level),
        graduation_count: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    };

    seat.insert(conn).await
}

pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<game_players::Model>, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::GameId.eq(game_id))
        .order_by_asc(game_players::Column::SeatPosition)
        .all(conn)
        .await
}

/// Write a player's rank after a round; errors with RecordNotUpdated when the seat is gone.
pub async fn update_rank<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    current_level: i16,
    graduation_count: i32,
) -> Result<(), sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();
    let result = game_players::Entity::update_many()
        .col_expr(
            game_players::Column::CurrentLevel,
            Expr::val(current_level).into(),
        )
        .col_expr(
            game_players::Column::GraduationCount,
            Expr::val(graduation_count).into(),
        )
        .col_expr(game_players::Column::UpdatedAt, Expr::val(now).into())
        .filter(game_players::Column::GameId.eq(game_id))
        .filter(game_players::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotUpdated);
    }
    Ok(())
}

pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = game_players::Entity::delete_many()
        .filter(game_players::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
