pub mod game_players;
pub mod games;
pub mod round_kings_side;
pub mod rounds;
pub mod users;

pub use game_players::Entity as GamePlayers;
pub use game_players::Model as GamePlayer;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use round_kings_side::Entity as RoundKingsSide;
pub use round_kings_side::Model as RoundKingsSideMember;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
pub use users::Entity as Users;
pub use users::Model as User;
