use kingscore::domain::RoundInput;
use kingscore::errors::domain::{DomainError, InfraErrorKind, StateKind, ValidationKind};
use kingscore::services::{GameLocks, RoundService};

use crate::support::memory_store::{MemoryStore, Op};

const GAME: i64 = 1;

fn eight_players() -> Vec<i64> {
    (1..=8).collect()
}

fn input(town_points: i64, kings_side: &[i64]) -> RoundInput {
    RoundInput {
        town_points,
        kings_side_player_ids: kings_side.to_vec(),
    }
}

fn service() -> RoundService {
    RoundService::new(GameLocks::default())
}

#[tokio::test]
async fn eight_player_round_climbs_graduates_and_passes_the_crown() {
    // King is player 3 at seat 2; partner is player 6 at seat 5.
    let store = MemoryStore::new(GAME, &eight_players())
        .with_king(3)
        .with_level(3, 10)
        .with_level(6, 10);

    let result = service()
        .submit_round(&store, GAME, input(50, &[6]), Some(3))
        .await
        .unwrap();

    assert_eq!(result.round.round_number, 1);
    assert_eq!(result.round.king_id, 3);
    assert_eq!(result.round.town_points, 50);
    assert!(result.outcome.kings_side_won);
    assert!(!result.outcome.is_tie);
    assert_eq!(result.outcome.level_change, 6);

    for id in [3, 6] {
        let seat = store.seat(id);
        assert_eq!(seat.current_level, 2, "player {id} should wrap to 2");
        assert_eq!(seat.graduation_count, 1);
    }
    assert_eq!(store.seat(1).current_level, 2);
    assert_eq!(store.seat(1).graduation_count, 0);

    assert_eq!(result.next_king_id, 6);
    assert_eq!(store.king(), Some(6));
    assert_eq!(store.lock_version(), 2);
    assert_eq!(store.roster(result.round.id), Some(vec![3, 6]));
}

#[tokio::test]
async fn king_is_added_to_kings_side_when_omitted() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);

    let result = service()
        .submit_round(&store, GAME, input(50, &[6]), None)
        .await
        .unwrap();

    assert_eq!(result.kings_side, vec![3, 6]);
}

#[tokio::test]
async fn tie_changes_no_ranks_but_moves_crown_to_town() {
    let store = MemoryStore::new(GAME, &eight_players())
        .with_king(3)
        .with_level(4, 7);

    // 3 decks: 120 <= 130 < 180
    let result = service()
        .submit_round(&store, GAME, input(130, &[3, 6]), None)
        .await
        .unwrap();

    assert!(result.outcome.is_tie);
    assert_eq!(result.outcome.level_change, 0);
    assert!(result.rank_updates.is_empty());
    assert!(!store.calls().contains(&Op::UpdateRank));
    assert_eq!(store.seat(4).current_level, 7);

    // First Town seat after the King's seat 2 is seat 3 (player 4).
    assert_eq!(store.king(), Some(4));
}

#[tokio::test]
async fn town_win_advances_every_town_player() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);

    let result = service()
        .submit_round(&store, GAME, input(300, &[3, 6]), None)
        .await
        .unwrap();

    assert!(result.outcome.town_won());
    let change = result.outcome.level_change as u8;
    for id in [1, 2, 4, 5, 7, 8] {
        assert_eq!(store.seat(id).current_level, 2 + change);
    }
    assert_eq!(store.seat(3).current_level, 2);
    assert_eq!(store.king(), Some(4));
}

#[tokio::test]
async fn round_numbers_increase_per_submission() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);
    let svc = service();

    let first = svc
        .submit_round(&store, GAME, input(50, &[6]), None)
        .await
        .unwrap();
    let second = svc
        .submit_round(&store, GAME, input(50, &[]), None)
        .await
        .unwrap();

    assert_eq!(first.round.round_number, 1);
    assert_eq!(second.round.round_number, 2);
    assert_eq!(store.round_numbers(), vec![1, 2]);
}

#[tokio::test]
async fn no_king_is_a_state_error_before_any_write() {
    let store = MemoryStore::new(GAME, &eight_players());

    let err = service()
        .submit_round(&store, GAME, input(50, &[6]), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::State(StateKind::NoKingSelected, _)
    ));
    assert_eq!(store.calls(), vec![Op::LoadGame]);
}

#[tokio::test]
async fn validation_failures_write_nothing() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);
    let svc = service();

    let err = svc
        .submit_round(&store, GAME, input(301, &[6]), None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidTownPoints, _)
    ));

    let err = svc
        .submit_round(&store, GAME, input(50, &[99]), None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidKingsSide, _)
    ));

    let err = svc
        .submit_round(&store, GAME, input(50, &[1, 2, 4, 5]), None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::TeamTooLarge, _)
    ));

    assert_eq!(store.round_count(), 0);
    assert!(store.calls().iter().all(|op| *op == Op::LoadGame));
}

#[tokio::test]
async fn roster_failure_deletes_the_round() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);
    store.fail(Op::InsertRoster);

    let err = service()
        .submit_round(&store, GAME, input(50, &[6]), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::Persistence, _)
    ));
    assert!(err.is_retryable());
    assert_eq!(store.round_count(), 0);
    assert_eq!(
        store.calls(),
        vec![
            Op::LoadGame,
            Op::LoadLastRoundNumber,
            Op::InsertRound,
            Op::InsertRoster,
            Op::DeleteRound,
        ]
    );
    assert_eq!(store.king(), Some(3));
}

#[tokio::test]
async fn failed_compensating_delete_still_surfaces_roster_error() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);
    store.fail(Op::InsertRoster);
    store.fail(Op::DeleteRound);

    let err = service()
        .submit_round(&store, GAME, input(50, &[6]), None)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("InsertRoster"));
    assert_eq!(store.round_count(), 1);
}

#[tokio::test]
async fn rank_failure_keeps_round_and_leaves_king_alone() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);
    store.fail(Op::UpdateRank);

    let err = service()
        .submit_round(&store, GAME, input(50, &[6]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Infra(_, _)));
    assert_eq!(store.round_count(), 1);
    assert!(!store.calls().contains(&Op::DeleteRound));
    assert!(!store.calls().contains(&Op::UpdateKing));
    assert_eq!(store.king(), Some(3));
}

#[tokio::test]
async fn king_write_failure_is_surfaced_after_ranks_apply() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);
    store.fail(Op::UpdateKing);

    let err = service()
        .submit_round(&store, GAME, input(50, &[6]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Infra(_, _)));
    assert_eq!(store.seat(6).current_level, 8);
    assert_eq!(store.king(), Some(3));
}

#[tokio::test]
async fn missing_game_is_not_found() {
    let store = MemoryStore::new(GAME, &eight_players()).with_king(3);

    let err = service()
        .submit_round(&store, 404, input(50, &[]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound(_, _)));
}
