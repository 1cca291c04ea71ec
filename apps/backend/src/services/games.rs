//! Game setup, scoreboard and King selection.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use tracing::{error, info, warn};

use crate::domain::{deck_requirements, DeckRequirements, PlayerCount};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::repos::games::{self, Game};
use crate::repos::{players, users};
use crate::services::game_locks::GameLocks;

/// One seat on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    pub user_id: i64,
    pub display_name: String,
    pub seat_position: u8,
    pub current_level: u8,
    pub graduation_count: u32,
    pub is_king: bool,
}

/// A game with its seats in position order.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub game: Game,
    pub seats: Vec<SeatView>,
    pub deck: Option<DeckRequirements>,
}

/// Create a game and seat `player_ids` in list order at the starting rank.
///
/// Seat writes that fail after the game row exists remove the game again
/// before the error is returned.
pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    player_ids: &[i64],
    created_by: Option<i64>,
) -> Result<GameDetail, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidGameName,
            "Game name must not be blank",
        ));
    }

    PlayerCount::new(player_ids.len())?;

    for (idx, id) in player_ids.iter().enumerate() {
        if player_ids[..idx].contains(id) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayer,
                format!("Player {id} listed more than once"),
            ));
        }
    }

    let known = users::find_many(conn, player_ids).await?;
    if let Some(missing) = player_ids
        .iter()
        .find(|id| !known.iter().any(|u| u.id == **id))
    {
        return Err(DomainError::validation(
            ValidationKind::UnknownPlayer,
            format!("User {missing} does not exist"),
        ));
    }

    let game = games::create_game(conn, name, created_by).await?;

    if let Err(e) = players::create_seats(conn, game.id, player_ids).await {
        warn!(game_id = game.id, error = %e, "seat write failed; deleting game");
        let cleanup = match players::delete_for_game(conn, game.id).await {
            Ok(_) => games::delete_game(conn, game.id).await,
            Err(e) => Err(e),
        };
        if let Err(cleanup) = cleanup {
            error!(
                game_id = game.id,
                error = %cleanup,
                "compensating delete failed; game requires manual reconciliation"
            );
        }
        return Err(e);
    }

    info!(game_id = game.id, players = player_ids.len(), "game created");
    game_detail(conn, game.id).await
}

/// Game plus scoreboard.
pub async fn game_detail<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<GameDetail, DomainError> {
    let game = games::require_game(conn, game_id).await?;
    let seats = players::list_for_game(conn, game_id).await?;

    let user_ids: Vec<i64> = seats.iter().map(|s| s.user_id).collect();
    let names: HashMap<i64, String> = users::find_many(conn, &user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u.display_name))
        .collect();

    let seats = seats
        .into_iter()
        .map(|seat| {
            let display_name = names.get(&seat.user_id).cloned().ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Seat {} references missing user {}", seat.id, seat.user_id),
                )
            })?;
            Ok(SeatView {
                user_id: seat.user_id,
                display_name,
                seat_position: seat.seat_position,
                current_level: seat.current_level,
                graduation_count: seat.graduation_count,
                is_king: game.current_king_id == Some(seat.user_id),
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let deck = deck_requirements(seats.len());
    Ok(GameDetail { game, seats, deck })
}

/// Games the user sits in, newest first.
pub async fn list_games_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Game>, DomainError> {
    games::list_for_user(conn, user_id).await
}

/// Hand the crown to a seated player.
///
/// Holds the game's lock so it cannot interleave with a round submission.
pub async fn select_king<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    locks: &GameLocks,
    game_id: i64,
    king_id: i64,
) -> Result<GameDetail, DomainError> {
    let _guard = locks.acquire(game_id).await;

    let game = games::require_game(conn, game_id).await?;
    let seats = players::list_for_game(conn, game_id).await?;
    if !seats.iter().any(|s| s.user_id == king_id) {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {king_id} has no seat in game {game_id}"),
        ));
    }

    games::update_king(conn, game_id, king_id, game.lock_version).await?;
    info!(game_id, king_id, previous_king_id = ?game.current_king_id, "King selected");

    game_detail(conn, game_id).await
}
