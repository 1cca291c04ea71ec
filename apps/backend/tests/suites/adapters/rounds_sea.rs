use kingscore::adapters::rounds_sea::{self, RoundCreate};
use kingscore::errors::domain::{ConflictKind, DomainError};

use crate::support::factory::create_game_with_players;
use crate::support::sqlite_db;

fn round(game_id: i64, round_number: i32, king_id: i64) -> RoundCreate {
    RoundCreate {
        game_id,
        round_number,
        king_id,
        town_points: 40,
        created_by: Some(king_id),
    }
}

#[tokio::test]
async fn max_round_number_tracks_inserts() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "max", 5).await;

    assert_eq!(rounds_sea::max_round_number(&db, game_id).await.unwrap(), None);

    rounds_sea::create_round(&db, round(game_id, 1, ids[0])).await.unwrap();
    rounds_sea::create_round(&db, round(game_id, 2, ids[1])).await.unwrap();
    assert_eq!(
        rounds_sea::max_round_number(&db, game_id).await.unwrap(),
        Some(2)
    );

    let listed: Vec<i32> = rounds_sea::list_for_game(&db, game_id)
        .await
        .unwrap()
        .iter()
        .map(|r| r.round_number)
        .collect();
    assert_eq!(listed, vec![2, 1]);
}

#[tokio::test]
async fn duplicate_round_number_is_round_number_taken() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "dup", 5).await;

    rounds_sea::create_round(&db, round(game_id, 1, ids[0])).await.unwrap();
    let err = rounds_sea::create_round(&db, round(game_id, 1, ids[0]))
        .await
        .unwrap_err();

    let domain: DomainError = err.into();
    assert!(matches!(
        domain,
        DomainError::Conflict(ConflictKind::RoundNumberTaken, _)
    ));
}

#[tokio::test]
async fn same_round_number_in_another_game_is_fine() {
    let db = sqlite_db().await;
    let (a, a_ids) = create_game_with_players(&db, "a", 5).await;
    let (b, b_ids) = create_game_with_players(&db, "b", 5).await;

    rounds_sea::create_round(&db, round(a, 1, a_ids[0])).await.unwrap();
    rounds_sea::create_round(&db, round(b, 1, b_ids[0])).await.unwrap();
}

#[tokio::test]
async fn roster_round_trip_and_delete() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "roster", 6).await;
    let created = rounds_sea::create_round(&db, round(game_id, 1, ids[0]))
        .await
        .unwrap();

    rounds_sea::create_roster(&db, created.id, game_id, &[ids[0], ids[3]])
        .await
        .unwrap();
    let roster = rounds_sea::rosters_for_game(&db, game_id).await.unwrap();
    let mut members: Vec<i64> = roster.iter().map(|r| r.user_id).collect();
    members.sort_unstable();
    assert_eq!(members, vec![ids[0], ids[3]]);

    rounds_sea::delete_round(&db, created.id).await.unwrap();
    assert!(rounds_sea::rosters_for_game(&db, game_id).await.unwrap().is_empty());
    assert_eq!(rounds_sea::max_round_number(&db, game_id).await.unwrap(), None);
}

#[tokio::test]
async fn empty_roster_is_a_no_op() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "empty", 5).await;
    let created = rounds_sea::create_round(&db, round(game_id, 1, ids[0]))
        .await
        .unwrap();

    rounds_sea::create_roster(&db, created.id, game_id, &[]).await.unwrap();
    assert!(rounds_sea::rosters_for_game(&db, game_id).await.unwrap().is_empty());
}
