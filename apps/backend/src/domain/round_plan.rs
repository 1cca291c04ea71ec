//! Pure part of round submission: everything decided before the first write.

use crate::domain::deck::{DeckConfig, PlayerCount};
use crate::domain::outcome::{calculate_round_result, validate_town_points, RoundOutcome, Side};
use crate::domain::progression::advance;
use crate::domain::seating::Game;
use crate::domain::team::max_team_size;
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

/// What the client submitted for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInput {
    pub town_points: i64,
    pub kings_side_player_ids: Vec<i64>,
}

/// New rank for one winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankUpdate {
    pub player_id: i64,
    pub new_level: u8,
    pub new_graduation_count: u32,
    pub graduated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPlan {
    pub king_id: i64,
    pub king_position: u8,
    pub town_points: u32,
    pub deck: &'static DeckConfig,
    /// King's Side with the King included, duplicates removed, in submission order.
    pub kings_side: Vec<i64>,
    /// Every seated player not on the King's Side, by seat position.
    pub town: Vec<i64>,
    pub winners: Vec<i64>,
    pub outcome: RoundOutcome,
    /// Empty on a tie or when the level change is zero.
    pub rank_updates: Vec<RankUpdate>,
}

/// Validate a submission against the loaded game and work out its effects.
///
/// Fails with `State(NoKingSelected)` when no King is set and with a
/// validation error for unsupported table sizes, out-of-range town points,
/// unseated King's Side players or an oversized King's Side.
pub fn plan_round(game: &Game, input: &RoundInput) -> Result<RoundPlan, DomainError> {
    let king = game.king_seat().ok_or_else(|| {
        DomainError::state(
            StateKind::NoKingSelected,
            "Select a King before recording a round",
        )
    })?;
    let king_id = king.player_id;

    let mut kings_side: Vec<i64> = Vec::with_capacity(input.kings_side_player_ids.len() + 1);
    if !input.kings_side_player_ids.contains(&king_id) {
        kings_side.push(king_id);
    }
    for &id in &input.kings_side_player_ids {
        if !kings_side.contains(&id) {
            kings_side.push(id);
        }
    }

    let player_count = PlayerCount::new(game.player_count())?;
    let deck = player_count.deck();

    let town_points = validate_town_points(input.town_points, deck.decks)?;

    if let Some(stranger) = kings_side.iter().find(|id| !game.is_seated(**id)) {
        return Err(DomainError::validation(
            ValidationKind::InvalidKingsSide,
            format!("Player {stranger} is not seated in game {}", game.game_id),
        ));
    }

    let max_team = max_team_size(player_count.get());
    if kings_side.len() > max_team {
        return Err(DomainError::validation(
            ValidationKind::TeamTooLarge,
            format!(
                "King's Side has {} players; at most {max_team} allowed with {} players",
                kings_side.len(),
                player_count.get()
            ),
        ));
    }

    let outcome = calculate_round_result(
        town_points,
        deck.decks,
        kings_side.len(),
        player_count.get(),
    );

    let town: Vec<i64> = game
        .seats()
        .iter()
        .map(|s| s.player_id)
        .filter(|id| !kings_side.contains(id))
        .collect();

    let winners = match outcome.winning_side() {
        Side::KingsSide => kings_side.clone(),
        Side::Town => town.clone(),
    };

    let rank_updates = if outcome.changes_ranks() {
        winners
            .iter()
            .filter_map(|id| game.seat_of(*id))
            .map(|seat| {
                let adv = advance(seat.current_level, outcome.level_change);
                RankUpdate {
                    player_id: seat.player_id,
                    new_level: adv.new_level,
                    new_graduation_count: seat.graduation_count + u32::from(adv.graduated),
                    graduated: adv.graduated,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(RoundPlan {
        king_id,
        king_position: king.position,
        town_points,
        deck,
        kings_side,
        town,
        winners,
        outcome,
        rank_updates,
    })
}
