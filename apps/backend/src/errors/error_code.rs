//! Error codes for the score tracker API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,

    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Player count outside the supported table sizes
    InvalidPlayerCount,
    /// Town points outside `[0, 100 * decks]`
    InvalidTownPoints,
    /// King's Side contains players without a seat
    InvalidKingsSide,
    /// King's Side larger than the table allows
    TeamTooLarge,
    /// The same player listed twice
    DuplicatePlayer,
    /// Referenced user does not exist
    UnknownPlayer,
    /// Game name missing or blank
    InvalidGameName,
    /// Display name missing or blank
    InvalidDisplayName,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    GameNotFound,
    UserNotFound,
    PlayerNotFound,
    RoundNotFound,
    NotFound,

    // State
    /// Round submitted before any King was selected
    NoKingSelected,
    /// Generic state error
    InvalidState,

    // Conflicts
    /// Another submission already took this round number
    RoundNumberTaken,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    /// A storage write failed; safe to retry
    PersistenceFailed,
    DataCorruption,
    /// King succession or another internal invariant failed
    InvariantViolation,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidTownPoints => "INVALID_TOWN_POINTS",
            Self::InvalidKingsSide => "INVALID_KINGS_SIDE",
            Self::TeamTooLarge => "TEAM_TOO_LARGE",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::InvalidGameName => "INVALID_GAME_NAME",
            Self::InvalidDisplayName => "INVALID_DISPLAY_NAME",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::NoKingSelected => "NO_KING_SELECTED",
            Self::InvalidState => "INVALID_STATE",

            Self::RoundNumberTaken => "ROUND_NUMBER_TAKEN",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::PersistenceFailed => "PERSISTENCE_FAILED",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
