//! Domain-facing repository functions (generic over ConnectionTrait).

pub mod games;
pub mod players;
pub mod rounds;
pub mod users;
