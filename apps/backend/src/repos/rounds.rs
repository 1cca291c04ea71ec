//! Round repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::rounds_sea as rounds_adapter;
use crate::entities::rounds;
use crate::errors::domain::DomainError;

/// A recorded round.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: i64,
    pub game_id: i64,
    pub round_number: i32,
    pub king_id: i64,
    pub town_points: i32,
    pub created_by: Option<i64>,
    pub created_at: time::OffsetDateTime,
}

impl From<rounds::Model> for Round {
    fn from(model: rounds::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            round_number: model.round_number,
            king_id: model.king_id,
            town_points: model.town_points,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}

/// A round together with its King's Side roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundWithRoster {
    pub round: Round,
    pub kings_side: Vec<i64>,
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    round_number: i32,
    king_id: i64,
    town_points: i32,
    created_by: Option<i64>,
) -> Result<Round, DomainError> {
    let dto = rounds_adapter::RoundCreate {
        game_id,
        round_number,
        king_id,
        town_points,
        created_by,
    };
    let round = rounds_adapter::create_round(conn, dto).await?;
    Ok(Round::from(round))
}

pub async fn delete_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<(), DomainError> {
    rounds_adapter::delete_round(conn, round_id).await?;
    Ok(())
}

/// Highest round number recorded for the game; 0 when none.
pub async fn last_round_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<i32, DomainError> {
    Ok(rounds_adapter::max_round_number(conn, game_id)
        .await?
        .unwrap_or(0))
}

pub async fn create_roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    game_id: i64,
    user_ids: &[i64],
) -> Result<(), DomainError> {
    rounds_adapter::create_roster(conn, round_id, game_id, user_ids).await?;
    Ok(())
}

/// Round history, newest first, each with its roster.
pub async fn history<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<RoundWithRoster>, DomainError> {
    let rounds = rounds_adapter::list_for_game(conn, game_id).await?;
    let rosters = rounds_adapter::rosters_for_game(conn, game_id).await?;

    let mut by_round: HashMap<i64, Vec<i64>> = HashMap::new();
    for row in rosters {
        by_round.entry(row.round_id).or_default().push(row.user_id);
    }

    Ok(rounds
        .into_iter()
        .map(|model| {
            let kings_side = by_round.remove(&model.id).unwrap_or_default();
            RoundWithRoster {
                round: Round::from(model),
                kings_side,
            }
        })
        .collect())
}
