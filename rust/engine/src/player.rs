use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Default starting stack for each seat in chips.
pub const STARTING_STACK: u32 = 1_000;

/// Per-seat mutable state. Only the game controller mutates it.
///
/// Chips leave `chips` for `current_bet` (this stage) and `committed` (this
/// hand) and come back only when the pot is paid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    /// Chips behind, not yet wagered
    pub chips: u32,
    /// Chips wagered in the current stage
    pub current_bet: u32,
    /// Chips wagered over the whole hand
    pub committed: u32,
    /// Out of the hand; terminal until the next hand
    pub folded: bool,
    /// Acted voluntarily in the current stage
    pub spoke: bool,
    /// Chose to show cards at showdown
    pub revealed: bool,
    pub is_all_in: bool,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            current_bet: 0,
            committed: 0,
            folded: false,
            spoke: false,
            revealed: false,
            is_all_in: false,
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Still contesting the pot.
    pub fn is_active(&self) -> bool {
        !self.folded
    }

    /// Still contesting the pot with chips behind.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.is_all_in
    }

    /// Clears per-hand state. A seat without chips sits the hand out folded.
    pub fn reset_for_hand(&mut self) {
        self.current_bet = 0;
        self.committed = 0;
        self.folded = self.chips == 0;
        self.spoke = false;
        self.revealed = false;
        self.is_all_in = false;
        self.hand.clear();
    }

    pub fn reset_for_stage(&mut self) {
        self.current_bet = 0;
        self.spoke = false;
    }

    /// Moves up to `amount` chips into this stage's bet and returns how many
    /// actually moved. Reaching zero chips marks the player all-in.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.chips);
        self.chips -= moved;
        self.current_bet += moved;
        self.committed += moved;
        if self.chips == 0 && moved > 0 {
            self.is_all_in = true;
        }
        moved
    }

    /// Returns this hand's wagers to the stack. Used when a hand is aborted.
    pub fn refund_committed(&mut self) -> u32 {
        let refund = self.committed;
        self.chips += refund;
        self.committed = 0;
        self.current_bet = 0;
        self.is_all_in = false;
        refund
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }
}
