//! Domain layer: the pure round-scoring engine.

pub mod deck;
pub mod outcome;
pub mod progression;
pub mod round_plan;
pub mod seating;
pub mod succession;
pub mod team;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_progression;

// Re-exports for ergonomics
pub use deck::{config_for, deck_requirements, is_valid_player_count, DeckConfig, DeckRequirements, PlayerCount};
pub use outcome::{calculate_round_result, RoundOutcome};
pub use progression::{advance, level_label, Advancement};
pub use round_plan::{plan_round, RankUpdate, RoundInput, RoundPlan};
pub use seating::{Game, Seat};
pub use succession::next_king;
pub use team::max_team_size;
