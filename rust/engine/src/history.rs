//! Line-notation hand history.
//!
//! Each hand is one line of space-separated tokens:
//!
//! ```text
//! #1 P0_100 P1_100 P2_100 D0 P1_sb1 P2_bb2 P0_r6 P1_f P2_c4 |B_Th7d2c |P_6.5 P2_x P0_b8 P2_f |W_P0+21
//! ```
//!
//! The buffer is owned by the game and handed to whatever sink persists it.

use crate::cards::Card;
use crate::rules::ValidatedAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blind {
    Small,
    Big,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    buf: String,
    line_open: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a hand line with the seat stacks as they stood before the blinds.
    pub fn begin_hand(&mut self, hand_number: u32, stacks: &[u32], dealer: usize) {
        if self.line_open {
            self.end_hand();
        }
        self.line_open = true;
        self.buf.push_str(&format!("#{}", hand_number));
        for (seat, chips) in stacks.iter().enumerate() {
            self.push(&format!("P{}_{}", seat, chips));
        }
        self.push(&format!("D{}", dealer));
    }

    pub fn blind(&mut self, seat: usize, blind: Blind, amount: u32) {
        let code = match blind {
            Blind::Small => "sb",
            Blind::Big => "bb",
        };
        self.push(&format!("P{}_{}{}", seat, code, amount));
    }

    pub fn action(&mut self, seat: usize, action: &ValidatedAction) {
        self.push(&encode_action(seat, action));
    }

    /// Stage separator: the newly dealt cards, then the pot in big blinds.
    pub fn board(&mut self, dealt: &[Card], pot: u32, big_blind: u32) {
        let cards: String = dealt.iter().map(Card::notation).collect();
        self.push(&format!("|B_{}", cards));
        self.push(&format!("|P_{}", pot_in_big_blinds(pot, big_blind)));
    }

    pub fn winners(&mut self, payouts: &[(usize, u32)]) {
        for (seat, amount) in payouts {
            self.push(&format!("|W_P{}+{}", seat, amount));
        }
    }

    pub fn aborted(&mut self) {
        self.push("|ABORT");
    }

    pub fn end_hand(&mut self) {
        if self.line_open {
            self.buf.push('\n');
            self.line_open = false;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drains completed lines; a hand still in progress stays buffered.
    pub fn take(&mut self) -> String {
        if self.line_open {
            let cut = self.buf.rfind('\n').map_or(0, |i| i + 1);
            let open = self.buf.split_off(cut);
            std::mem::replace(&mut self.buf, open)
        } else {
            std::mem::take(&mut self.buf)
        }
    }

    fn push(&mut self, token: &str) {
        if !self.buf.is_empty() && !self.buf.ends_with('\n') {
            self.buf.push(' ');
        }
        self.buf.push_str(token);
    }
}

/// `P<seat>_<code><amount?>` for one applied action.
pub fn encode_action(seat: usize, action: &ValidatedAction) -> String {
    let code = match *action {
        ValidatedAction::Fold => "f".to_string(),
        ValidatedAction::Check => "x".to_string(),
        ValidatedAction::Call(n) => format!("c{}", n),
        ValidatedAction::Bet { to } => format!("b{}", to),
        ValidatedAction::Raise { to } => format!("r{}", to),
        ValidatedAction::Reveal => "s".to_string(),
        ValidatedAction::Hide => "m".to_string(),
    };
    format!("P{}_{}", seat, code)
}

/// Pot size in big blinds with at most two decimals and no trailing zeros.
pub fn pot_in_big_blinds(pot: u32, big_blind: u32) -> String {
    if big_blind == 0 {
        return pot.to_string();
    }
    let s = format!("{:.2}", f64::from(pot) / f64::from(big_blind));
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
