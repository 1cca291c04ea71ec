//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game row as the domain layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub created_by: Option<i64>,
    pub current_king_id: Option<i64>,
    pub lock_version: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_by: model.created_by,
            current_king_id: model.current_king_id,
            lock_version: model.lock_version,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn game_not_found(game_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Load a game or fail with `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    created_by: Option<i64>,
) -> Result<Game, DomainError> {
    let mut dto = games_adapter::GameCreate::new(name);
    if let Some(user_id) = created_by {
        dto = dto.by(user_id);
    }
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), DomainError> {
    games_adapter::delete_game(conn, game_id).await?;
    Ok(())
}

pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::list_for_user(conn, user_id).await?;
    Ok(games.into_iter().map(Game::from).collect())
}

/// Move the crown; fails with `Conflict(OptimisticLock)` when `expected_version` is stale.
pub async fn update_king<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    king_id: i64,
    expected_version: i32,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameUpdateKing::new(game_id, king_id, expected_version);
    match games_adapter::update_king(conn, dto).await {
        Ok(game) => Ok(Game::from(game)),
        Err(sea_orm::DbErr::RecordNotFound(_)) => Err(game_not_found(game_id)),
        Err(e) => Err(e.into()),
    }
}
