//! Deck requirements lookup.

use actix_web::{web, HttpResponse};

use crate::domain::deck_requirements;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// GET /api/deck-requirements/{player_count}
async fn get_deck_requirements(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let raw = path.into_inner();
    let player_count = raw.parse::<usize>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidPlayerCount,
            format!("Invalid player count: {raw}"),
        )
    })?;

    let requirements = deck_requirements(player_count).ok_or_else(|| {
        AppError::invalid(
            ErrorCode::InvalidPlayerCount,
            format!("No deck configuration for {player_count} players; supported range is 5-12"),
        )
    })?;

    Ok(HttpResponse::Ok().json(requirements))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{player_count}", web::get().to(get_deck_requirements));
}
