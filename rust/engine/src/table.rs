use serde::{Deserialize, Serialize};

/// Dealer and blind seats for the current hand.
///
/// With three or more seats the three positions are distinct and run
/// dealer → SB → BB clockwise. Heads-up, the dealer posts the small blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Positions {
    pub dealer: usize,
    pub small_blind: usize,
    pub big_blind: usize,
    seats: usize,
}

impl Positions {
    pub fn new(seats: usize) -> Self {
        Self::with_live(&vec![true; seats])
    }

    /// Initial positions with the button on the first live seat.
    pub fn with_live(live: &[bool]) -> Self {
        let mut p = Self {
            dealer: live.iter().position(|&l| l).unwrap_or(0),
            small_blind: 0,
            big_blind: 0,
            seats: live.len(),
        };
        p.place_blinds(live);
        p
    }

    pub fn seats(&self) -> usize {
        self.seats
    }

    /// Moves the button one seat clockwise and re-derives the blinds.
    /// With every seat live this is a plain +1 (mod seats) on all three.
    pub fn rotate(&mut self) {
        let all_live = vec![true; self.seats];
        self.rotate_among(&all_live);
    }

    /// Like [`Positions::rotate`], but skips seats that are not `live`
    /// (players without chips).
    pub fn rotate_among(&mut self, live: &[bool]) {
        if let Some(d) = next_live(live, self.dealer) {
            self.dealer = d;
        }
        self.place_blinds(live);
    }

    fn place_blinds(&mut self, live: &[bool]) {
        let live_count = live.iter().filter(|&&l| l).count();
        if live_count == 2 {
            self.small_blind = self.dealer;
        } else {
            self.small_blind = next_live(live, self.dealer).unwrap_or(self.dealer);
        }
        self.big_blind = next_live(live, self.small_blind).unwrap_or(self.small_blind);
    }

    /// First seat to act before the flop: the one after the big blind.
    pub fn first_to_act_preflop(&self) -> usize {
        (self.big_blind + 1) % self.seats
    }

    /// First seat to act after the flop: the small blind.
    pub fn first_to_act_postflop(&self) -> usize {
        self.small_blind
    }

    /// Clockwise distance from the dealer to `seat`.
    pub fn distance_from_dealer(&self, seat: usize) -> usize {
        (seat + self.seats - self.dealer) % self.seats
    }
}

/// Next seat after `from` (exclusive, wrapping) whose `live` flag is set.
fn next_live(live: &[bool], from: usize) -> Option<usize> {
    let n = live.len();
    (1..=n).map(|k| (from + k) % n).find(|&s| live[s])
}

/// Display name of a seat, derived only from its place relative to the
/// dealer and blinds.
///
/// ```
/// use holdem_engine::table::{seat_name, Positions};
///
/// let p = Positions::new(6);
/// let names: Vec<String> = (0..6).map(|s| seat_name(s, &p)).collect();
/// assert_eq!(names, ["BTN", "SB", "BB", "LJ", "HJ", "CO"]);
/// ```
pub fn seat_name(seat: usize, positions: &Positions) -> String {
    let n = positions.seats();
    if seat == positions.dealer {
        return "BTN".to_string();
    }
    if seat == positions.small_blind {
        return "SB".to_string();
    }
    if seat == positions.big_blind {
        return "BB".to_string();
    }

    // Late seats are named first; tables of six or fewer have no UTG.
    let before_dealer = (positions.dealer + n - seat) % n;
    let after_big_blind = (seat + n - positions.big_blind) % n;
    match before_dealer {
        1 => "CO".to_string(),
        2 => "HJ".to_string(),
        3 => "LJ".to_string(),
        _ if after_big_blind == 1 => "UTG".to_string(),
        _ => format!("UTG+{}", after_big_blind - 1),
    }
}
