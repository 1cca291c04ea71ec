use kingscore::domain::RoundInput;
use kingscore::errors::domain::{ConflictKind, DomainError, StateKind};
use kingscore::repos::{games, players, rounds};
use kingscore::services::{GameLocks, RoundService, SeaRoundStore};

use crate::support::factory::{create_game_with_players, crown, set_rank};
use crate::support::sqlite_db;

#[tokio::test]
async fn end_to_end_round_updates_storage() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "e2e", 8).await;
    let king = ids[2];
    let partner = ids[5];
    crown(&db, game_id, king).await;
    set_rank(&db, game_id, king, 10, 0).await;
    set_rank(&db, game_id, partner, 10, 0).await;

    let store = SeaRoundStore::new(&db);
    let service = RoundService::new(GameLocks::default());
    let result = service
        .submit_round(
            &store,
            game_id,
            RoundInput {
                town_points: 50,
                kings_side_player_ids: vec![partner],
            },
            Some(king),
        )
        .await
        .unwrap();

    assert_eq!(result.round.round_number, 1);
    assert_eq!(result.outcome.level_change, 6);
    assert_eq!(result.next_king_id, partner);

    let seats = players::list_for_game(&db, game_id).await.unwrap();
    for seat in &seats {
        if seat.user_id == king || seat.user_id == partner {
            assert_eq!(seat.current_level, 2);
            assert_eq!(seat.graduation_count, 1);
        } else {
            assert_eq!(seat.current_level, 2);
            assert_eq!(seat.graduation_count, 0);
        }
    }

    let game = games::require_game(&db, game_id).await.unwrap();
    assert_eq!(game.current_king_id, Some(partner));
    // 1 at creation, +1 for the first crowning, +1 for succession
    assert_eq!(game.lock_version, 3);

    let history = rounds::history(&db, game_id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].round.king_id, king);
    assert_eq!(history[0].kings_side, vec![king, partner]);
}

#[tokio::test]
async fn no_king_leaves_storage_untouched() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "noking", 5).await;

    let store = SeaRoundStore::new(&db);
    let err = RoundService::default()
        .submit_round(
            &store,
            game_id,
            RoundInput {
                town_points: 10,
                kings_side_player_ids: vec![ids[0]],
            },
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::State(StateKind::NoKingSelected, _)
    ));
    assert_eq!(rounds::last_round_number(&db, game_id).await.unwrap(), 0);
}

#[tokio::test]
async fn stale_game_version_is_a_conflict() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "stale", 5).await;
    crown(&db, game_id, ids[0]).await;

    let err = games::update_king(&db, game_id, ids[1], 1)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));
}

#[tokio::test]
async fn concurrent_submissions_for_one_game_are_serialized() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "race", 5).await;
    crown(&db, game_id, ids[0]).await;

    let service = RoundService::new(GameLocks::default());
    let store = SeaRoundStore::new(&db);
    let input = || RoundInput {
        town_points: 0,
        kings_side_player_ids: Vec::new(),
    };

    let (a, b) = tokio::join!(
        service.submit_round(&store, game_id, input(), None),
        service.submit_round(&store, game_id, input(), None),
    );

    let mut numbers = vec![a.unwrap().round.round_number, b.unwrap().round.round_number];
    numbers.sort_unstable();
    assert_eq!(numbers, vec![1, 2]);
}
