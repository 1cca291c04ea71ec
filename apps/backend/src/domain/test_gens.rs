// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::deck::{config_for, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::progression::{MAX_LEVEL, MIN_LEVEL};
use crate::domain::seating::{Game, Seat};

pub fn player_count() -> impl Strategy<Value = usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

pub fn level() -> impl Strategy<Value = u8> {
    MIN_LEVEL..=MAX_LEVEL
}

/// (player_count, decks, town_points) with points in range for the table.
pub fn table_and_points() -> impl Strategy<Value = (usize, u8, u32)> {
    player_count().prop_flat_map(|n| {
        let decks = config_for(n).map(|c| c.decks).unwrap_or(2);
        (Just(n), Just(decks), 0..=100 * u32::from(decks))
    })
}

/// A valid game: seats 0..n with ids 1000+pos, random levels and a King.
pub fn game() -> impl Strategy<Value = Game> {
    player_count().prop_flat_map(|n| {
        (
            prop::collection::vec((level(), 0u32..4), n),
            0..n,
        )
            .prop_map(move |(ranks, king_pos)| {
                let seats: Vec<Seat> = ranks
                    .into_iter()
                    .enumerate()
                    .map(|(i, (lvl, grads))| Seat {
                        player_id: 1000 + i as i64,
                        position: i as u8,
                        current_level: lvl,
                        graduation_count: grads,
                    })
                    .collect();
                let king = seats[king_pos].player_id;
                Game::new(1, Some(king), 1, seats).expect("generated game is valid")
            })
    })
}
