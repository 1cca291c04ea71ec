/// Largest King's Side (King plus friends) allowed at a table of `player_count`.
pub const fn max_team_size(player_count: usize) -> usize {
    match player_count {
        0..=7 => 3,
        8..=9 => 4,
        10..=11 => 5,
        _ => 6,
    }
}
