use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Betting stage of a hand. Stages only move forward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Hole cards dealt, no community cards
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands are compared; terminal
    Showdown,
}

impl Stage {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Stage {
        match self {
            Stage::Preflop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Showdown => Stage::Showdown,
        }
    }

    /// Community cards dealt on entering this stage.
    pub fn cards_dealt(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            Stage::Preflop | Stage::Showdown => 0,
        }
    }

    pub fn is_betting(self) -> bool {
        self != Stage::Showdown
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Preflop => "Pre-flop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        }
    }
}

/// Wagering state for one hand, mutated in place as stages advance.
///
/// `min_bet` is the smallest legal total for the next bet or raise: the big
/// blind when no bet is open, otherwise the current bet plus the last full
/// raise increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingRound {
    pub stage: Stage,
    pub pot: u32,
    pub current_bet: u32,
    pub min_bet: u32,
    pub current_player_index: usize,
    big_blind: u32,
}

impl BettingRound {
    pub fn new(big_blind: u32) -> Self {
        Self {
            stage: Stage::Preflop,
            pot: 0,
            current_bet: 0,
            min_bet: big_blind,
            current_player_index: 0,
            big_blind,
        }
    }

    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    pub fn update_pot(&mut self, amount: u32) {
        self.pot += amount;
    }

    /// Sets a new bet level reached by a bet or raise to `total`.
    /// A short all-in raise moves the bet without lowering the raise increment.
    pub fn raise_to(&mut self, total: u32) {
        if total <= self.current_bet {
            return;
        }
        let increment = total - self.current_bet;
        let last_increment = self.min_bet.saturating_sub(self.current_bet).max(self.big_blind);
        self.current_bet = total;
        self.min_bet = total.saturating_add(increment.max(last_increment));
    }

    /// Blinds set the bet level directly; the minimum raise is one big blind above it.
    pub fn open_with_blind(&mut self, amount: u32) {
        if amount > self.current_bet {
            self.current_bet = amount;
        }
        self.min_bet = self.current_bet.saturating_add(self.big_blind);
    }

    pub fn next_stage(&mut self) {
        self.stage = self.stage.next();
        self.current_bet = 0;
        self.min_bet = self.big_blind;
    }

    /// A stage is complete once only one player remains, or every player still
    /// able to act has spoken and matched the current bet. All-in players are
    /// exempt from matching. Blind posts do not count as speaking, which gives
    /// the big blind its option.
    pub fn is_complete(&self, players: &[Player]) -> bool {
        let mut active = players.iter().filter(|p| !p.folded);
        if active.clone().count() <= 1 {
            return true;
        }
        active.all(|p| p.is_all_in || (p.spoke && p.current_bet == self.current_bet))
    }

    pub fn to_call(&self, player: &Player) -> u32 {
        self.current_bet.saturating_sub(player.current_bet)
    }
}
