//! Deck composition per table size.

use serde::Serialize;

use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 5;
pub const MAX_PLAYERS: usize = 12;

/// Cards in one standard deck, jokers excluded.
const CARDS_PER_DECK: u32 = 52;

/// Deck composition for one table size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckConfig {
    pub decks: u8,
    pub red_jokers: u8,
    pub black_jokers: u8,
    pub cards_per_player: u8,
    pub kitty: u8,
}

const fn cfg(decks: u8, red_jokers: u8, black_jokers: u8, cards_per_player: u8, kitty: u8) -> DeckConfig {
    DeckConfig {
        decks,
        red_jokers,
        black_jokers,
        cards_per_player,
        kitty,
    }
}

/// Indexed by `player_count - MIN_PLAYERS`.
static DECK_TABLE: [DeckConfig; MAX_PLAYERS - MIN_PLAYERS + 1] = [
    cfg(2, 2, 2, 20, 8), // 5
    cfg(2, 2, 2, 17, 6), // 6
    cfg(2, 0, 0, 14, 6), // 7
    cfg(3, 2, 0, 19, 6), // 8
    cfg(3, 3, 0, 17, 6), // 9
    cfg(3, 0, 0, 15, 6), // 10
    cfg(3, 2, 2, 14, 6), // 11
    cfg(4, 2, 0, 17, 6), // 12
];

impl DeckConfig {
    /// Cards in play: jokers plus `decks` standard decks.
    pub fn deck_cards(&self) -> u32 {
        u32::from(self.decks) * CARDS_PER_DECK
            + u32::from(self.red_jokers)
            + u32::from(self.black_jokers)
    }

    /// Town points available in a round.
    pub fn max_points(&self) -> u32 {
        100 * u32::from(self.decks)
    }
}

pub fn is_valid_player_count(player_count: usize) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count)
}

/// `None` for table sizes the game does not support.
pub fn config_for(player_count: usize) -> Option<&'static DeckConfig> {
    if !is_valid_player_count(player_count) {
        return None;
    }
    DECK_TABLE.get(player_count - MIN_PLAYERS)
}

/// A table size known to have a deck configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerCount(u8);

impl PlayerCount {
    pub fn new(player_count: usize) -> Result<Self, DomainError> {
        if is_valid_player_count(player_count) {
            Ok(Self(player_count as u8))
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "Player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {player_count}"
                ),
            ))
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    pub fn deck(self) -> &'static DeckConfig {
        &DECK_TABLE[self.get() - MIN_PLAYERS]
    }

    /// Cards dealt to players plus the kitty.
    pub fn total_cards(self) -> u32 {
        let deck = self.deck();
        self.0 as u32 * u32::from(deck.cards_per_player) + u32::from(deck.kitty)
    }
}

/// Everything a table needs to know before dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRequirements {
    pub player_count: u8,
    pub decks: u8,
    pub red_jokers: u8,
    pub black_jokers: u8,
    pub cards_per_player: u8,
    pub kitty: u8,
    pub total_cards: u32,
}

pub fn deck_requirements(player_count: usize) -> Option<DeckRequirements> {
    let count = PlayerCount::new(player_count).ok()?;
    let deck = count.deck();
    Some(DeckRequirements {
        player_count: count.0,
        decks: deck.decks,
        red_jokers: deck.red_jokers,
        black_jokers: deck.black_jokers,
        cards_per_player: deck.cards_per_player,
        kitty: deck.kitty,
        total_cards: count.total_cards(),
    })
}
