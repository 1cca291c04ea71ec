//! DTOs for rounds_sea adapter.

/// DTO for recording a played round.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub game_id: i64,
    pub round_number: i32,
    pub king_id: i64,
    pub town_points: i32,
    pub created_by: Option<i64>,
}
