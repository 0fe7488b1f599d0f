//! Pot division among tied winners.
//!
//! This is a single-pot model: every winner shares the whole pot equally, and
//! side pots for unequal all-in stacks are not computed.

/// Splits `pot` evenly between `winners` (seat indices).
///
/// Integer division leaves at most `winners.len() - 1` odd chips; all of them
/// go to the winner in the lowest seat. The result lists `(seat, amount)` in
/// ascending seat order and always sums to `pot`.
///
/// ```
/// use holdem_engine::pot::split_pot;
///
/// assert_eq!(split_pot(31, &[4, 1]), vec![(1, 16), (4, 15)]);
/// ```
pub fn split_pot(pot: u32, winners: &[usize]) -> Vec<(usize, u32)> {
    let mut seats = winners.to_vec();
    seats.sort_unstable();
    seats.dedup();
    if seats.is_empty() {
        return Vec::new();
    }

    let n = seats.len() as u32;
    let share = pot / n;
    let remainder = pot % n;
    seats
        .into_iter()
        .enumerate()
        .map(|(i, seat)| {
            let odd = if i == 0 { remainder } else { 0 };
            (seat, share + odd)
        })
        .collect()
}
