use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Sub,
    DisplayName,
    Email,
    ProfileCompleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    CreatedBy,
    CurrentKingId,
    LockVersion,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum GamePlayers {
    Table,
    Id,
    GameId,
    UserId,
    SeatPosition,
    CurrentLevel,
    GraduationCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    GameId,
    RoundNumber,
    KingId,
    TownPoints,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum RoundKingsSide {
    Table,
    Id,
    RoundId,
    GameId,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Users::Sub).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().null())
                    .col(
                        ColumnDef::new(Users::ProfileCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_sub")
                    .table(Users::Table)
                    .col(Users::Sub)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::CreatedBy).big_integer().null())
                    .col(ColumnDef::new(Games::CurrentKingId).big_integer().null())
                    .col(
                        ColumnDef::new(Games::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_created_by")
                            .from(Games::Table, Games::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_current_king_id")
                            .from(Games::Table, Games::CurrentKingId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // game_players (seats)
        manager
            .create_table(
                Table::create()
                    .table(GamePlayers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GamePlayers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(GamePlayers::GameId).big_integer().not_null())
                    .col(ColumnDef::new(GamePlayers::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GamePlayers::SeatPosition)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::CurrentLevel)
                            .small_integer()
                            .not_null()
                            .default(2),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::GraduationCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GamePlayers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_game_id")
                            .from(GamePlayers::Table, GamePlayers::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_user_id")
                            .from(GamePlayers::Table, GamePlayers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_players_game_seat")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::GameId)
                    .col(GamePlayers::SeatPosition)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_players_game_user")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::GameId)
                    .col(GamePlayers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rounds
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rounds::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Rounds::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Rounds::RoundNumber).integer().not_null())
                    .col(ColumnDef::new(Rounds::KingId).big_integer().not_null())
                    .col(ColumnDef::new(Rounds::TownPoints).integer().not_null())
                    .col(ColumnDef::new(Rounds::CreatedBy).big_integer().null())
                    .col(
                        ColumnDef::new(Rounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_game_id")
                            .from(Rounds::Table, Rounds::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_king_id")
                            .from(Rounds::Table, Rounds::KingId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_created_by")
                            .from(Rounds::Table, Rounds::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Backstop against concurrent submissions from separate processes.
        manager
            .create_index(
                Index::create()
                    .name("ux_rounds_game_round")
                    .table(Rounds::Table)
                    .col(Rounds::GameId)
                    .col(Rounds::RoundNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // round_kings_side
        manager
            .create_table(
                Table::create()
                    .table(RoundKingsSide::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoundKingsSide::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(RoundKingsSide::RoundId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoundKingsSide::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RoundKingsSide::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_round_kings_side_round_id")
                            .from(RoundKingsSide::Table, RoundKingsSide::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_round_kings_side_game_id")
                            .from(RoundKingsSide::Table, RoundKingsSide::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_round_kings_side_user_id")
                            .from(RoundKingsSide::Table, RoundKingsSide::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_round_kings_side_round_user")
                    .table(RoundKingsSide::Table)
                    .col(RoundKingsSide::RoundId)
                    .col(RoundKingsSide::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order
        manager
            .drop_table(
                Table::drop()
                    .table(RoundKingsSide::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(GamePlayers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
