use kingscore::adapters::games_sea::{self, GameCreate};
use kingscore::adapters::players_sea;
use kingscore::errors::domain::DomainError;
use sea_orm::DbErr;

use crate::support::factory::create_users;
use crate::support::sqlite_db;

async fn empty_game(db: &sea_orm::DatabaseConnection) -> i64 {
    games_sea::create_game(db, GameCreate::new("Seats"))
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn list_is_ordered_by_seat() {
    let db = sqlite_db().await;
    let game_id = empty_game(&db).await;
    let ids = create_users(&db, "p", 3).await;

    // Insert out of seat order.
    players_sea::create_seat(&db, game_id, ids[0], 2, 2).await.unwrap();
    players_sea::create_seat(&db, game_id, ids[1], 0, 2).await.unwrap();
    players_sea::create_seat(&db, game_id, ids[2], 1, 2).await.unwrap();

    let seats = players_sea::list_for_game(&db, game_id).await.unwrap();
    let order: Vec<(i16, i64)> = seats.iter().map(|s| (s.seat_position, s.user_id)).collect();
    assert_eq!(order, vec![(0, ids[1]), (1, ids[2]), (2, ids[0])]);
    assert!(seats.iter().all(|s| s.current_level == 2 && s.graduation_count == 0));
}

#[tokio::test]
async fn seat_and_user_are_unique_per_game() {
    let db = sqlite_db().await;
    let game_id = empty_game(&db).await;
    let ids = create_users(&db, "uniq", 2).await;

    players_sea::create_seat(&db, game_id, ids[0], 0, 2).await.unwrap();

    let same_seat = players_sea::create_seat(&db, game_id, ids[1], 0, 2).await;
    assert!(matches!(
        same_seat.map_err(DomainError::from),
        Err(DomainError::Conflict(_, _))
    ));

    let same_user = players_sea::create_seat(&db, game_id, ids[0], 1, 2).await;
    assert!(matches!(
        same_user.map_err(DomainError::from),
        Err(DomainError::Conflict(_, _))
    ));
}

#[tokio::test]
async fn update_rank_writes_level_and_graduations() {
    let db = sqlite_db().await;
    let game_id = empty_game(&db).await;
    let ids = create_users(&db, "rank", 1).await;
    players_sea::create_seat(&db, game_id, ids[0], 0, 2).await.unwrap();

    players_sea::update_rank(&db, game_id, ids[0], 11, 2).await.unwrap();

    let seat = &players_sea::list_for_game(&db, game_id).await.unwrap()[0];
    assert_eq!(seat.current_level, 11);
    assert_eq!(seat.graduation_count, 2);
}

#[tokio::test]
async fn update_rank_without_seat_is_not_updated() {
    let db = sqlite_db().await;
    let game_id = empty_game(&db).await;
    let ids = create_users(&db, "noseat", 1).await;

    let err = players_sea::update_rank(&db, game_id, ids[0], 3, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, DbErr::RecordNotUpdated));
}

#[tokio::test]
async fn delete_for_game_reports_count() {
    let db = sqlite_db().await;
    let game_id = empty_game(&db).await;
    let ids = create_users(&db, "del", 2).await;
    players_sea::create_seat(&db, game_id, ids[0], 0, 2).await.unwrap();
    players_sea::create_seat(&db, game_id, ids[1], 1, 2).await.unwrap();

    assert_eq!(players_sea::delete_for_game(&db, game_id).await.unwrap(), 2);
    assert!(players_sea::list_for_game(&db, game_id).await.unwrap().is_empty());
}
