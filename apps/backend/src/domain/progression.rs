//! Rank climbing from 2 up to Ace, wrapping to 2 on graduation.

pub const MIN_LEVEL: u8 = 2;
/// Ace.
pub const MAX_LEVEL: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advancement {
    pub new_level: u8,
    /// The player passed the Ace; the caller bumps the graduation count.
    pub graduated: bool,
}

/// Advance a rank by `change` levels. Anything past Ace resets to 2, regardless
/// of how far past it the change would have gone.
pub fn advance(current_level: u8, change: u32) -> Advancement {
    let raw = u32::from(current_level) + change;
    if raw > u32::from(MAX_LEVEL) {
        Advancement {
            new_level: MIN_LEVEL,
            graduated: true,
        }
    } else {
        Advancement {
            new_level: raw as u8,
            graduated: false,
        }
    }
}

pub fn is_valid_level(level: u8) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

/// Scoreboard label: "A" for Ace, the number otherwise.
pub fn level_label(level: u8) -> String {
    if level == MAX_LEVEL {
        "A".to_string()
    } else {
        level.to_string()
    }
}
