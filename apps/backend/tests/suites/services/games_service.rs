use kingscore::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use kingscore::repos::games as game_repo;
use kingscore::services::games;
use kingscore::services::GameLocks;

use crate::support::factory::{create_game_with_players, create_users};
use crate::support::sqlite_db;

fn validation_kind(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_seats_players_in_list_order_at_level_two() {
    let db = sqlite_db().await;
    let mut ids = create_users(&db, "seat", 7).await;
    ids.reverse();

    let detail = games::create_game(&db, "  Friday table ", &ids, Some(ids[0]))
        .await
        .unwrap();

    assert_eq!(detail.game.name, "Friday table");
    assert_eq!(detail.game.current_king_id, None);
    assert_eq!(detail.seats.len(), 7);
    for (pos, seat) in detail.seats.iter().enumerate() {
        assert_eq!(seat.user_id, ids[pos]);
        assert_eq!(usize::from(seat.seat_position), pos);
        assert_eq!(seat.current_level, 2);
        assert_eq!(seat.graduation_count, 0);
        assert!(!seat.is_king);
    }

    let deck = detail.deck.expect("7 players has a deck config");
    assert_eq!(deck.player_count, 7);
    assert_eq!(deck.decks, 2);
}

#[tokio::test]
async fn create_rejects_bad_input() {
    let db = sqlite_db().await;
    let ids = create_users(&db, "bad", 6).await;

    let err = games::create_game(&db, "   ", &ids, None).await.unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::InvalidGameName);

    let err = games::create_game(&db, "Too few", &ids[..4], None)
        .await
        .unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::InvalidPlayerCount);

    let dup = vec![ids[0], ids[1], ids[2], ids[3], ids[0]];
    let err = games::create_game(&db, "Dup", &dup, None).await.unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::DuplicatePlayer);

    let unknown = vec![ids[0], ids[1], ids[2], ids[3], 9_999];
    let err = games::create_game(&db, "Ghost", &unknown, None)
        .await
        .unwrap_err();
    assert_eq!(validation_kind(err), ValidationKind::UnknownPlayer);

    assert!(game_repo::list_for_user(&db, ids[0])
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn list_returns_only_games_the_user_sits_in() {
    let db = sqlite_db().await;
    let (first, ids) = create_game_with_players(&db, "list", 5).await;
    let second = games::create_game(&db, "Rematch", &ids, None)
        .await
        .unwrap()
        .game
        .id;
    let (_, outsiders) = create_game_with_players(&db, "other", 5).await;

    let listed: Vec<i64> = games::list_games_for_user(&db, ids[0])
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&first));
    assert!(listed.contains(&second));

    let other: Vec<i64> = games::list_games_for_user(&db, outsiders[0])
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.id)
        .collect();
    assert!(!other.contains(&first));
}

#[tokio::test]
async fn select_king_requires_a_seat() {
    let db = sqlite_db().await;
    let (game_id, ids) = create_game_with_players(&db, "crown", 5).await;
    let locks = GameLocks::default();

    let detail = games::select_king(&db, &locks, game_id, ids[3])
        .await
        .unwrap();
    assert_eq!(detail.game.current_king_id, Some(ids[3]));
    assert_eq!(detail.game.lock_version, 2);
    assert!(detail.seats[3].is_king);

    let (_, strangers) = create_game_with_players(&db, "strangers", 5).await;
    let err = games::select_king(&db, &locks, game_id, strangers[0])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::Player, _)
    ));
}

#[tokio::test]
async fn detail_for_missing_game_is_not_found() {
    let db = sqlite_db().await;
    let err = games::game_detail(&db, 12_345).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
}
