//! Round submission and round history.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::domain::{
    calculate_round_result, next_king, plan_round, PlayerCount, RankUpdate, RoundInput,
    RoundOutcome,
};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::{players, rounds};
use crate::services::game_locks::GameLocks;
use crate::services::store::{NewRound, RoundStore};

/// The round row as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedRound {
    pub id: i64,
    pub round_number: i32,
    pub king_id: i64,
    pub town_points: i32,
}

/// Everything a successful submission changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSubmission {
    pub round: RecordedRound,
    pub outcome: RoundOutcome,
    pub kings_side: Vec<i64>,
    pub rank_updates: Vec<RankUpdate>,
    pub next_king_id: i64,
}

/// One entry of a game's round history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub id: i64,
    pub round_number: i32,
    pub king_id: i64,
    pub town_points: i32,
    pub kings_side_player_ids: Vec<i64>,
    pub outcome: RoundOutcome,
    pub created_at: time::OffsetDateTime,
}

/// Records rounds against a `RoundStore`, one game at a time.
#[derive(Debug, Clone, Default)]
pub struct RoundService {
    locks: GameLocks,
}

impl RoundService {
    pub fn new(locks: GameLocks) -> Self {
        Self { locks }
    }

    /// Validate, persist and apply one round.
    ///
    /// Writes happen in order: round row, King's Side roster, winners' ranks,
    /// then the new King. A failed roster write deletes the round row again;
    /// later failures leave earlier writes in place and are logged for manual
    /// reconciliation.
    pub async fn submit_round<S: RoundStore + ?Sized>(
        &self,
        store: &S,
        game_id: i64,
        input: RoundInput,
        created_by: Option<i64>,
    ) -> Result<RoundSubmission, DomainError> {
        let _guard = self.locks.acquire(game_id).await;

        let game = store.load_game(game_id).await?;
        let plan = plan_round(&game, &input)?;
        debug!(
            game_id,
            king_id = plan.king_id,
            kings_side = plan.kings_side.len(),
            town_points = plan.town_points,
            level_change = plan.outcome.level_change,
            "round planned"
        );

        let round_number = store.load_last_round_number(game_id).await? + 1;
        let town_points = i32::try_from(plan.town_points).map_err(|_| {
            DomainError::invariant(format!("town points {} exceed storage range", plan.town_points))
        })?;

        let round_id = store
            .insert_round(NewRound {
                game_id,
                round_number,
                king_id: plan.king_id,
                town_points,
                created_by,
            })
            .await?;

        if let Err(e) = store
            .insert_kings_side_roster(round_id, game_id, &plan.kings_side)
            .await
        {
            warn!(game_id, round_id, round_number, error = %e, "roster write failed; deleting round");
            if let Err(cleanup) = store.delete_round(round_id).await {
                error!(
                    game_id,
                    round_id,
                    round_number,
                    error = %cleanup,
                    "compensating delete failed; round requires manual reconciliation"
                );
            }
            return Err(e);
        }

        for update in &plan.rank_updates {
            if let Err(e) = store.update_player_rank(game_id, update).await {
                error!(
                    game_id,
                    round_id,
                    round_number,
                    player_id = update.player_id,
                    error = %e,
                    "rank update failed after round was recorded; manual reconciliation required"
                );
                return Err(e);
            }
        }

        let next = match next_king(game.seats(), plan.king_position, &plan.winners) {
            Ok(seat) => seat.player_id,
            Err(e) => {
                error!(game_id, round_id, round_number, error = %e, "King succession failed");
                return Err(e);
            }
        };

        if let Err(e) = store
            .update_game_king(game_id, next, game.lock_version)
            .await
        {
            error!(
                game_id,
                round_id,
                round_number,
                next_king_id = next,
                error = %e,
                "King update failed after ranks were applied; manual reconciliation required"
            );
            return Err(e);
        }

        info!(
            game_id,
            round_id,
            round_number,
            kings_side_won = plan.outcome.kings_side_won,
            is_tie = plan.outcome.is_tie,
            level_change = plan.outcome.level_change,
            next_king_id = next,
            "round recorded"
        );

        Ok(RoundSubmission {
            round: RecordedRound {
                id: round_id,
                round_number,
                king_id: plan.king_id,
                town_points,
            },
            outcome: plan.outcome,
            kings_side: plan.kings_side,
            rank_updates: plan.rank_updates,
            next_king_id: next,
        })
    }
}

/// Round history, newest first, with each outcome recomputed from the stored points.
pub async fn round_history<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<RoundSummary>, DomainError> {
    let player_count = PlayerCount::new(players::list_for_game(conn, game_id).await?.len())?;
    let decks = player_count.deck().decks;

    rounds::history(conn, game_id)
        .await?
        .into_iter()
        .map(|entry| {
            let points = u32::try_from(entry.round.town_points).map_err(|_| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("round {} has negative town points", entry.round.id),
                )
            })?;
            let outcome = calculate_round_result(
                points,
                decks,
                entry.kings_side.len(),
                player_count.get(),
            );
            Ok(RoundSummary {
                id: entry.round.id,
                round_number: entry.round.round_number,
                king_id: entry.round.king_id,
                town_points: entry.round.town_points,
                kings_side_player_ids: entry.kings_side,
                outcome,
                created_at: entry.round.created_at,
            })
        })
        .collect()
}
