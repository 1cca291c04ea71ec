// Unit tests for DomainError -> AppError mapping, no HTTP server or database involved
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, StateKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::InvalidTownPoints, "town points 301 > 300");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidTownPoints);
    assert_eq!(app.status().as_u16(), 422);

    let team = DomainError::validation(ValidationKind::TeamTooLarge, "too many");
    let app: AppError = team.into();
    assert_eq!(app.code().as_str(), "TEAM_TOO_LARGE");
    assert_eq!(app.status().as_u16(), 422);

    let blank = DomainError::validation(ValidationKind::InvalidDisplayName, "blank");
    let app: AppError = blank.into();
    assert_eq!(app.code().as_str(), "INVALID_DISPLAY_NAME");
    assert_eq!(app.status().as_u16(), 422);

    let other = DomainError::validation(ValidationKind::Other("x".into()), "bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_no_king_to_409() {
    let de = DomainError::state(StateKind::NoKingSelected, "select a King first");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "NO_KING_SELECTED");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_conflicts() {
    let taken = DomainError::conflict(ConflictKind::RoundNumberTaken, "round 3 exists");
    let app: AppError = taken.into();
    assert_eq!(app.code().as_str(), "ROUND_NUMBER_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let lock = DomainError::conflict(ConflictKind::OptimisticLock, "stale");
    let app: AppError = lock.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");

    let other = DomainError::conflict(ConflictKind::Other("Unique".to_string()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::User, "no user");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "USER_NOT_FOUND");
}

#[test]
fn maps_infra() {
    let p = DomainError::infra(InfraErrorKind::Persistence, "write failed");
    let app: AppError = p.into();
    assert_eq!(app.code().as_str(), "PERSISTENCE_FAILED");
    assert_eq!(app.status().as_u16(), 503);
    assert!(matches!(app, AppError::Unavailable { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn maps_invariant_violation_to_distinct_500() {
    let de = DomainError::invariant("no winner found in seating order");
    assert!(!de.is_retryable());
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvariantViolation);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn retryable_kinds() {
    assert!(DomainError::infra(InfraErrorKind::Persistence, "x").is_retryable());
    assert!(DomainError::conflict(ConflictKind::RoundNumberTaken, "x").is_retryable());
    assert!(!DomainError::validation(ValidationKind::InvalidKingsSide, "x").is_retryable());
    assert!(!DomainError::state(StateKind::NoKingSelected, "x").is_retryable());
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation(ValidationKind::DuplicatePlayer, "dup");
    assert!(matches!(
        validation,
        DomainError::Validation(ValidationKind::DuplicatePlayer, _)
    ));

    let state = DomainError::state(StateKind::NoKingSelected, "none");
    assert!(matches!(
        state,
        DomainError::State(StateKind::NoKingSelected, _)
    ));

    let not_found = DomainError::not_found(NotFoundKind::Round, "round missing");
    assert!(matches!(
        not_found,
        DomainError::NotFound(NotFoundKind::Round, _)
    ));

    let infra = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    assert!(matches!(
        infra,
        DomainError::Infra(InfraErrorKind::Timeout, _)
    ));
}
