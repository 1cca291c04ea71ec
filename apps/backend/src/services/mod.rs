pub mod game_locks;
pub mod games;
pub mod rounds;
pub mod store;
pub mod users;

pub use game_locks::GameLocks;
pub use rounds::{RecordedRound, RoundService, RoundSubmission, RoundSummary};
pub use store::{NewRound, RoundStore, SeaRoundStore};
