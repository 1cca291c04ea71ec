//! Seat repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::domain::progression::MIN_LEVEL;
use crate::domain::Seat;
use crate::entities::game_players;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Seat row as the domain layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatRecord {
    pub id: i64,
    pub game_id: i64,
    pub user_id: i64,
    pub seat_position: u8,
    pub current_level: u8,
    pub graduation_count: u32,
}

impl TryFrom<game_players::Model> for SeatRecord {
    type Error = DomainError;

    fn try_from(model: game_players::Model) -> Result<Self, Self::Error> {
        let corrupt = |field: &str| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("game_players row {} has out-of-range {field}", model.id),
            )
        };
        Ok(Self {
            id: model.id,
            game_id: model.game_id,
            user_id: model.user_id,
            seat_position: u8::try_from(model.seat_position)
                .map_err(|_| corrupt("seat_position"))?,
            current_level: u8::try_from(model.current_level)
                .map_err(|_| corrupt("current_level"))?,
            graduation_count: u32::try_from(model.graduation_count)
                .map_err(|_| corrupt("graduation_count"))?,
        })
    }
}

impl From<&SeatRecord> for Seat {
    fn from(record: &SeatRecord) -> Self {
        Seat {
            player_id: record.user_id,
            position: record.seat_position,
            current_level: record.current_level,
            graduation_count: record.graduation_count,
        }
    }
}

/// Seat `user_ids` in list order (position = index) at the starting rank.
pub async fn create_seats<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_ids: &[i64],
) -> Result<Vec<SeatRecord>, DomainError> {
    let mut seats = Vec::with_capacity(user_ids.len());
    for (position, &user_id) in user_ids.iter().enumerate() {
        let position = i16::try_from(position).map_err(|_| {
            DomainError::invariant(format!("seat position {position} out of range"))
        })?;
        let model = players_adapter::create_seat(
            conn,
            game_id,
            user_id,
            position,
            i16::from(MIN_LEVEL),
        )
        .await?;
        seats.push(SeatRecord::try_from(model)?);
    }
    Ok(seats)
}

/// Seats for a game ordered by position.
pub async fn list_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<SeatRecord>, DomainError> {
    players_adapter::list_for_game(conn, game_id)
        .await?
        .into_iter()
        .map(SeatRecord::try_from)
        .collect()
}

pub async fn update_rank<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    new_level: u8,
    new_graduation_count: u32,
) -> Result<(), DomainError> {
    let graduation_count = i32::try_from(new_graduation_count).map_err(|_| {
        DomainError::invariant(format!(
            "graduation count {new_graduation_count} exceeds storage range"
        ))
    })?;
    players_adapter::update_rank(
        conn,
        game_id,
        user_id,
        i16::from(new_level),
        graduation_count,
    )
    .await?;
    Ok(())
}

pub async fn delete_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, DomainError> {
    Ok(players_adapter::delete_for_game(conn, game_id).await?)
}
