//! Round outcome: who won, whether it was a tie, and by how many levels.
//!
//! Thresholds scale with the number of decks (`d`):
//!
//! | town points        | result            | base change |
//! |--------------------|-------------------|-------------|
//! | 0                  | King's Side wins  | 3           |
//! | 1 ..< 18d          | King's Side wins  | 2           |
//! | 18d ..< 40d        | King's Side wins  | 1           |
//! | 40d ..< 60d        | tie               | 0           |
//! | 60d ..< 80d        | Town wins         | 1           |
//! | 80d ..< 100d       | Town wins         | 2           |
//! | 100d               | Town wins         | 3           |
//!
//! A King's Side win is multiplied by `1 + shortfall`, where shortfall is how
//! many players the King's Side is below the maximum team size.

use serde::Serialize;

use crate::domain::team::max_team_size;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub kings_side_won: bool,
    pub is_tie: bool,
    pub level_change: u32,
}

/// The side that takes the King role next (and, unless tied, climbs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    KingsSide,
    Town,
}

impl RoundOutcome {
    pub fn town_won(&self) -> bool {
        !self.kings_side_won && !self.is_tie
    }

    /// Town is the nominal winner of a tie, for succession only.
    pub fn winning_side(&self) -> Side {
        if self.kings_side_won {
            Side::KingsSide
        } else {
            Side::Town
        }
    }

    /// Whether winners' ranks move this round.
    pub fn changes_ranks(&self) -> bool {
        !self.is_tie && self.level_change > 0
    }
}

/// Check a submitted point total against the decks in play.
pub fn validate_town_points(town_points: i64, decks: u8) -> Result<u32, DomainError> {
    let max = 100 * i64::from(decks);
    if !(0..=max).contains(&town_points) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTownPoints,
            format!("Town points must be between 0 and {max}, got {town_points}"),
        ));
    }
    Ok(town_points as u32)
}

/// Compute the outcome of a round. `town_points` must already be within
/// `0..=100 * decks` and `kings_side_count` at least 1.
pub fn calculate_round_result(
    town_points: u32,
    decks: u8,
    kings_side_count: usize,
    player_count: usize,
) -> RoundOutcome {
    let d = u32::from(decks);
    let max_points = 100 * d;
    let shortfall = max_team_size(player_count).saturating_sub(kings_side_count) as u32;

    let kings_side_won = town_points < 40 * d;
    let is_tie = !kings_side_won && town_points < 60 * d;

    let level_change = if is_tie {
        0
    } else if kings_side_won {
        let base = if town_points == 0 {
            3
        } else if town_points < 18 * d {
            2
        } else {
            1
        };
        base * (1 + shortfall)
    } else if town_points == max_points {
        3
    } else if town_points >= 80 * d {
        2
    } else {
        1
    };

    RoundOutcome {
        kings_side_won,
        is_tie,
        level_change,
    }
}
