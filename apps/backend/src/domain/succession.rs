use crate::domain::seating::Seat;
use crate::errors::domain::DomainError;

/// The next King: the first winner found scanning forward from the current
/// King's position, wrapping around the table. The current King is checked
/// last.
///
/// `seats` must be ordered so that `seats[i]` sits at position `i`. Finding no
/// winner means the winner set and the seating disagree, which is reported as
/// an invariant violation rather than guessed around.
pub fn next_king<'a>(
    seats: &'a [Seat],
    current_king_position: u8,
    winner_ids: &[i64],
) -> Result<&'a Seat, DomainError> {
    let n = seats.len();
    let start = usize::from(current_king_position);

    for offset in 1..=n {
        let pos = (start + offset) % n;
        if let Some(seat) = seats.get(pos) {
            if winner_ids.contains(&seat.player_id) {
                return Ok(seat);
            }
        }
    }

    Err(DomainError::invariant(format!(
        "no winner among {n} seats after position {current_king_position} (winners: {winner_ids:?})"
    )))
}
