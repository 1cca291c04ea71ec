//! Round submission and history routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::rfc3339;
use crate::db::require_db;
use crate::domain::{RoundInput, RoundOutcome};
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, ValidatedJson};
use crate::services::rounds::{round_history, RecordedRound, RoundService, RoundSummary};
use crate::services::store::SeaRoundStore;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRoundRequest {
    #[serde(default)]
    pub kings_side_player_ids: Vec<i64>,
    pub town_points: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RankChangeResponse {
    player_id: i64,
    new_level: u8,
    graduated: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRoundResponse {
    round: RecordedRound,
    outcome: RoundOutcome,
    kings_side_player_ids: Vec<i64>,
    rank_changes: Vec<RankChangeResponse>,
    next_king_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundHistoryEntry {
    id: i64,
    round_number: i32,
    king_id: i64,
    town_points: i32,
    kings_side_player_ids: Vec<i64>,
    outcome: RoundOutcome,
    created_at: String,
}

impl From<RoundSummary> for RoundHistoryEntry {
    fn from(summary: RoundSummary) -> Self {
        Self {
            id: summary.id,
            round_number: summary.round_number,
            king_id: summary.king_id,
            town_points: summary.town_points,
            kings_side_player_ids: summary.kings_side_player_ids,
            outcome: summary.outcome,
            created_at: rfc3339(summary.created_at),
        }
    }
}

/// POST /api/games/{game_id}/rounds
async fn submit_round(
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<SubmitRoundRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = body.into_inner();

    let store = SeaRoundStore::new(db);
    let service = RoundService::new(app_state.game_locks.clone());
    let submission = service
        .submit_round(
            &store,
            game_id.0,
            RoundInput {
                town_points: req.town_points,
                kings_side_player_ids: req.kings_side_player_ids,
            },
            Some(user.id),
        )
        .await?;

    let response = SubmitRoundResponse {
        round: submission.round,
        outcome: submission.outcome,
        kings_side_player_ids: submission.kings_side,
        rank_changes: submission
            .rank_updates
            .iter()
            .map(|u| RankChangeResponse {
                player_id: u.player_id,
                new_level: u.new_level,
                graduated: u.graduated,
            })
            .collect(),
        next_king_id: submission.next_king_id,
    };
    Ok(HttpResponse::Created().json(response))
}

/// GET /api/games/{game_id}/rounds
async fn list_rounds(
    _user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body: Vec<RoundHistoryEntry> = round_history(db, game_id.0)
        .await?
        .into_iter()
        .map(RoundHistoryEntry::from)
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{game_id}/rounds")
            .route(web::get().to(list_rounds))
            .route(web::post().to(submit_round)),
    );
}
