//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub name: String,
    pub created_by: Option<i64>,
}

impl GameCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_by: None,
        }
    }

    pub fn by(mut self, user_id: i64) -> Self {
        self.created_by = Some(user_id);
        self
    }
}

/// DTO for moving the crown with optimistic locking.
///
/// `expected_version` must match the stored `lock_version` or the update is
/// rejected with an optimistic lock payload.
#[derive(Debug, Clone, Copy)]
pub struct GameUpdateKing {
    pub id: i64,
    pub king_id: i64,
    pub expected_version: i32,
}

impl GameUpdateKing {
    pub fn new(id: i64, king_id: i64, expected_version: i32) -> Self {
        Self {
            id,
            king_id,
            expected_version,
        }
    }
}
