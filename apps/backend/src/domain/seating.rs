//! A game's seats as loaded from storage.

use serde::Serialize;

use crate::domain::progression::{is_valid_level, MIN_LEVEL};
use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub player_id: i64,
    pub position: u8,
    pub current_level: u8,
    pub graduation_count: u32,
}

impl Seat {
    /// A fresh seat at the start of a game.
    pub fn new(player_id: i64, position: u8) -> Self {
        Self {
            player_id,
            position,
            current_level: MIN_LEVEL,
            graduation_count: 0,
        }
    }
}

/// Game state the round engine works on.
///
/// Seats are stored by position, so `seats()[i].position == i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub game_id: i64,
    pub current_king_id: Option<i64>,
    /// Version read with the game row; the King update is conditional on it.
    pub lock_version: i32,
    seats: Vec<Seat>,
}

fn corrupt(game_id: i64, detail: impl std::fmt::Display) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("Game {game_id}: {detail}"),
    )
}

impl Game {
    /// Build from stored rows, rejecting data that breaks the seating rules:
    /// positions must be a permutation of `0..n`, players unique, levels in
    /// range and the King (when set) seated.
    pub fn new(
        game_id: i64,
        current_king_id: Option<i64>,
        lock_version: i32,
        mut seats: Vec<Seat>,
    ) -> Result<Self, DomainError> {
        seats.sort_by_key(|s| s.position);

        for (idx, seat) in seats.iter().enumerate() {
            if usize::from(seat.position) != idx {
                return Err(corrupt(
                    game_id,
                    format!("seat positions are not 0..{}", seats.len()),
                ));
            }
            if !is_valid_level(seat.current_level) {
                return Err(corrupt(
                    game_id,
                    format!(
                        "player {} has level {}",
                        seat.player_id, seat.current_level
                    ),
                ));
            }
            if seats[..idx].iter().any(|s| s.player_id == seat.player_id) {
                return Err(corrupt(
                    game_id,
                    format!("player {} holds two seats", seat.player_id),
                ));
            }
        }

        if let Some(king) = current_king_id {
            if !seats.iter().any(|s| s.player_id == king) {
                return Err(corrupt(game_id, format!("King {king} has no seat")));
            }
        }

        Ok(Self {
            game_id,
            current_king_id,
            lock_version,
            seats,
        })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    pub fn seat_of(&self, player_id: i64) -> Option<&Seat> {
        self.seats.iter().find(|s| s.player_id == player_id)
    }

    pub fn is_seated(&self, player_id: i64) -> bool {
        self.seat_of(player_id).is_some()
    }

    pub fn king_seat(&self) -> Option<&Seat> {
        self.current_king_id.and_then(|id| self.seat_of(id))
    }
}
