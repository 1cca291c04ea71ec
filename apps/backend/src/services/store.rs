//! Storage contract the round orchestrator runs against.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::domain::{Game, RankUpdate, Seat};
use crate::errors::domain::DomainError;
use crate::repos::{games, players, rounds};

/// Round record as submitted, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRound {
    pub game_id: i64,
    pub round_number: i32,
    pub king_id: i64,
    pub town_points: i32,
    pub created_by: Option<i64>,
}

/// Persistence operations needed to record a round.
///
/// Each call is an independent write; there is no enclosing transaction.
#[async_trait]
pub trait RoundStore: Send + Sync {
    /// Game with its seats in position order; `NotFound(Game)` when missing.
    async fn load_game(&self, game_id: i64) -> Result<Game, DomainError>;

    /// Highest recorded round number, 0 when none.
    async fn load_last_round_number(&self, game_id: i64) -> Result<i32, DomainError>;

    /// Returns the new round id.
    async fn insert_round(&self, round: NewRound) -> Result<i64, DomainError>;

    async fn insert_kings_side_roster(
        &self,
        round_id: i64,
        game_id: i64,
        player_ids: &[i64],
    ) -> Result<(), DomainError>;

    async fn delete_round(&self, round_id: i64) -> Result<(), DomainError>;

    async fn update_player_rank(&self, game_id: i64, update: &RankUpdate)
        -> Result<(), DomainError>;

    /// Optimistic write guarded by `expected_version`.
    async fn update_game_king(
        &self,
        game_id: i64,
        king_id: i64,
        expected_version: i32,
    ) -> Result<(), DomainError>;
}

/// `RoundStore` backed by the SeaORM repos.
pub struct SeaRoundStore<'a, C> {
    conn: &'a C,
}

impl<'a, C> SeaRoundStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C: ConnectionTrait + Send + Sync> RoundStore for SeaRoundStore<'_, C> {
    async fn load_game(&self, game_id: i64) -> Result<Game, DomainError> {
        let game = games::require_game(self.conn, game_id).await?;
        let seats: Vec<Seat> = players::list_for_game(self.conn, game_id)
            .await?
            .iter()
            .map(Seat::from)
            .collect();
        Game::new(game.id, game.current_king_id, game.lock_version, seats)
    }

    async fn load_last_round_number(&self, game_id: i64) -> Result<i32, DomainError> {
        rounds::last_round_number(self.conn, game_id).await
    }

    async fn insert_round(&self, round: NewRound) -> Result<i64, DomainError> {
        let created = rounds::create_round(
            self.conn,
            round.game_id,
            round.round_number,
            round.king_id,
            round.town_points,
            round.created_by,
        )
        .await?;
        Ok(created.id)
    }

    async fn insert_kings_side_roster(
        &self,
        round_id: i64,
        game_id: i64,
        player_ids: &[i64],
    ) -> Result<(), DomainError> {
        rounds::create_roster(self.conn, round_id, game_id, player_ids).await
    }

    async fn delete_round(&self, round_id: i64) -> Result<(), DomainError> {
        rounds::delete_round(self.conn, round_id).await
    }

    async fn update_player_rank(
        &self,
        game_id: i64,
        update: &RankUpdate,
    ) -> Result<(), DomainError> {
        players::update_rank(
            self.conn,
            game_id,
            update.player_id,
            update.new_level,
            update.new_graduation_count,
        )
        .await
    }

    async fn update_game_king(
        &self,
        game_id: i64,
        king_id: i64,
        expected_version: i32,
    ) -> Result<(), DomainError> {
        games::update_king(self.conn, game_id, king_id, expected_version).await?;
        Ok(())
    }
}
