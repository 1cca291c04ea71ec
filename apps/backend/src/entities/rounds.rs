use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(column_name = "round_number")]
    pub round_number: i32,
    /// King at the time the round was played
    #[sea_orm(column_name = "king_id")]
    pub king_id: i64,
    #[sea_orm(column_name = "town_points")]
    pub town_points: i32,
    #[sea_orm(column_name = "created_by")]
    pub created_by: Option<i64>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id"
    )]
    Game,
    #[sea_orm(has_many = "super::round_kings_side::Entity")]
    KingsSide,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::round_kings_side::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KingsSide.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
