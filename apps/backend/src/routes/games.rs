//! Game-related HTTP routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::rfc3339;
use crate::db::require_db;
use crate::domain::{level_label, DeckRequirements};
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, ValidatedJson};
use crate::repos::games::Game;
use crate::services::games::{self as game_service, GameDetail, SeatView};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub name: String,
    pub player_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectKingRequest {
    pub king_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameResponse {
    id: i64,
    name: String,
    current_king_id: Option<i64>,
    lock_version: i32,
    created_at: String,
    updated_at: String,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            current_king_id: game.current_king_id,
            lock_version: game.lock_version,
            created_at: rfc3339(game.created_at),
            updated_at: rfc3339(game.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeatResponse {
    user_id: i64,
    display_name: String,
    seat_position: u8,
    current_level: u8,
    level_label: String,
    graduation_count: u32,
    is_king: bool,
}

impl From<SeatView> for SeatResponse {
    fn from(seat: SeatView) -> Self {
        Self {
            user_id: seat.user_id,
            display_name: seat.display_name,
            seat_position: seat.seat_position,
            current_level: seat.current_level,
            level_label: level_label(seat.current_level),
            graduation_count: seat.graduation_count,
            is_king: seat.is_king,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameDetailResponse {
    game: GameResponse,
    seats: Vec<SeatResponse>,
    deck_requirements: Option<DeckRequirements>,
}

impl From<GameDetail> for GameDetailResponse {
    fn from(detail: GameDetail) -> Self {
        Self {
            game: GameResponse::from(&detail.game),
            seats: detail.seats.into_iter().map(SeatResponse::from).collect(),
            deck_requirements: detail.deck,
        }
    }
}

/// GET /api/games
///
/// Games the caller sits in, newest first.
async fn list_games(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let games = game_service::list_games_for_user(db, user.id).await?;
    let body: Vec<GameResponse> = games.iter().map(GameResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/games
async fn create_game(
    user: CurrentUser,
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let req = body.into_inner();
    let detail = game_service::create_game(db, &req.name, &req.player_ids, Some(user.id)).await?;
    Ok(HttpResponse::Created().json(GameDetailResponse::from(detail)))
}

/// GET /api/games/{game_id}
///
/// Game plus scoreboard: seats by position with levels and graduations.
async fn get_game(
    _user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let detail = game_service::game_detail(db, game_id.0).await?;
    Ok(HttpResponse::Ok().json(GameDetailResponse::from(detail)))
}

/// PATCH /api/games/{game_id}
///
/// Selects the King.
async fn select_king(
    _user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<SelectKingRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let detail =
        game_service::select_king(db, &app_state.game_locks, game_id.0, body.king_id).await?;
    Ok(HttpResponse::Ok().json(GameDetailResponse::from(detail)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    );
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(get_game))
            .route(web::patch().to(select_king)),
    );
}
