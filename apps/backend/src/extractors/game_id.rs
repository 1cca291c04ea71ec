use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use super::app_state;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::games;

/// Game ID extracted from the route path parameter
/// Validates that the game exists in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

/// Parse and range-check the raw `{game_id}` segment.
fn parse_game_id(raw: &str) -> Result<i64, AppError> {
    let game_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
    })?;
    if game_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Game id must be positive, got: {game_id}"),
        ));
    }
    Ok(game_id)
}

impl FromRequest for GameId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let raw = req.match_info().get("game_id").ok_or_else(|| {
                AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
            })?;
            let game_id = parse_game_id(raw)?;
            tracing::Span::current().record("game_id", game_id);

            let state = app_state(&req)?;
            let db = require_db(&state)?;
            if games::find_by_id(db, game_id).await?.is_none() {
                return Err(AppError::not_found(
                    ErrorCode::GameNotFound,
                    format!("Game {game_id} not found"),
                ));
            }

            Ok(GameId(game_id))
        })
    }
}
