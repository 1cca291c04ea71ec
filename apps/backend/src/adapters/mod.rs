//! Adapters for external dependencies.

pub mod games_sea;
pub mod players_sea;
pub mod rounds_sea;
pub mod users_sea;
