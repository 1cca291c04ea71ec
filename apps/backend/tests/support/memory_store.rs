//! In-memory `RoundStore` with fault injection for the orchestration tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use kingscore::domain::{Game, RankUpdate, Seat};
use kingscore::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind,
};
use kingscore::services::{NewRound, RoundStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    LoadGame,
    LoadLastRoundNumber,
    InsertRound,
    InsertRoster,
    DeleteRound,
    UpdateRank,
    UpdateKing,
}

#[derive(Debug, Default)]
struct Inner {
    game_id: i64,
    king: Option<i64>,
    lock_version: i32,
    seats: Vec<Seat>,
    rounds: Vec<(i64, NewRound)>,
    rosters: HashMap<i64, Vec<i64>>,
    next_round_id: i64,
    failing: HashSet<Op>,
    calls: Vec<Op>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Seat `player_ids` in order at level 2.
    pub fn new(game_id: i64, player_ids: &[i64]) -> Self {
        let seats = player_ids
            .iter()
            .enumerate()
            .map(|(pos, id)| Seat::new(*id, pos as u8))
            .collect();
        Self {
            inner: Mutex::new(Inner {
                game_id,
                lock_version: 1,
                seats,
                next_round_id: 100,
                ..Inner::default()
            }),
        }
    }

    pub fn with_king(self, king_id: i64) -> Self {
        self.inner.lock().unwrap().king = Some(king_id);
        self
    }

    pub fn with_level(self, player_id: i64, level: u8) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let seat = inner
                .seats
                .iter_mut()
                .find(|s| s.player_id == player_id)
                .expect("player should be seated");
            seat.current_level = level;
        }
        self
    }

    pub fn fail(&self, op: Op) {
        self.inner.lock().unwrap().failing.insert(op);
    }

    pub fn calls(&self) -> Vec<Op> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn round_count(&self) -> usize {
        self.inner.lock().unwrap().rounds.len()
    }

    pub fn round_numbers(&self) -> Vec<i32> {
        let inner = self.inner.lock().unwrap();
        inner.rounds.iter().map(|(_, r)| r.round_number).collect()
    }

    pub fn roster(&self, round_id: i64) -> Option<Vec<i64>> {
        self.inner.lock().unwrap().rosters.get(&round_id).cloned()
    }

    pub fn king(&self) -> Option<i64> {
        self.inner.lock().unwrap().king
    }

    pub fn lock_version(&self) -> i32 {
        self.inner.lock().unwrap().lock_version
    }

    pub fn seat(&self, player_id: i64) -> Seat {
        *self
            .inner
            .lock()
            .unwrap()
            .seats
            .iter()
            .find(|s| s.player_id == player_id)
            .expect("player should be seated")
    }

    fn enter(&self, op: Op) -> Result<std::sync::MutexGuard<'_, Inner>, DomainError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(op);
        if inner.failing.contains(&op) {
            return Err(DomainError::infra(
                InfraErrorKind::Persistence,
                format!("injected failure in {op:?}"),
            ));
        }
        Ok(inner)
    }
}

#[async_trait]
impl RoundStore for MemoryStore {
    async fn load_game(&self, game_id: i64) -> Result<Game, DomainError> {
        let inner = self.enter(Op::LoadGame)?;
        if game_id != inner.game_id {
            return Err(DomainError::not_found(NotFoundKind::Game, "no such game"));
        }
        Game::new(
            inner.game_id,
            inner.king,
            inner.lock_version,
            inner.seats.clone(),
        )
    }

    async fn load_last_round_number(&self, _game_id: i64) -> Result<i32, DomainError> {
        let inner = self.enter(Op::LoadLastRoundNumber)?;
        Ok(inner
            .rounds
            .iter()
            .map(|(_, r)| r.round_number)
            .max()
            .unwrap_or(0))
    }

    async fn insert_round(&self, round: NewRound) -> Result<i64, DomainError> {
        let mut inner = self.enter(Op::InsertRound)?;
        if inner
            .rounds
            .iter()
            .any(|(_, r)| r.round_number == round.round_number)
        {
            return Err(DomainError::conflict(
                ConflictKind::RoundNumberTaken,
                "round number taken",
            ));
        }
        inner.next_round_id += 1;
        let id = inner.next_round_id;
        inner.rounds.push((id, round));
        Ok(id)
    }

    async fn insert_kings_side_roster(
        &self,
        round_id: i64,
        _game_id: i64,
        player_ids: &[i64],
    ) -> Result<(), DomainError> {
        let mut inner = self.enter(Op::InsertRoster)?;
        inner.rosters.insert(round_id, player_ids.to_vec());
        Ok(())
    }

    async fn delete_round(&self, round_id: i64) -> Result<(), DomainError> {
        let mut inner = self.enter(Op::DeleteRound)?;
        inner.rounds.retain(|(id, _)| *id != round_id);
        inner.rosters.remove(&round_id);
        Ok(())
    }

    async fn update_player_rank(
        &self,
        _game_id: i64,
        update: &RankUpdate,
    ) -> Result<(), DomainError> {
        let mut inner = self.enter(Op::UpdateRank)?;
        let seat = inner
            .seats
            .iter_mut()
            .find(|s| s.player_id == update.player_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, "not seated"))?;
        seat.current_level = update.new_level;
        seat.graduation_count = update.new_graduation_count;
        Ok(())
    }

    async fn update_game_king(
        &self,
        _game_id: i64,
        king_id: i64,
        expected_version: i32,
    ) -> Result<(), DomainError> {
        let mut inner = self.enter(Op::UpdateKing)?;
        if inner.lock_version != expected_version {
            return Err(DomainError::conflict(ConflictKind::OptimisticLock, "stale"));
        }
        inner.king = Some(king_id);
        inner.lock_version += 1;
        Ok(())
    }
}
