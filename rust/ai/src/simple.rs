//! Minimal strategies for tests and load simulations.

use holdem_engine::action::{Action, ActionKind, Amount};
use holdem_engine::decision::DecisionProvider;
use holdem_engine::state::TurnView;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Never folds, never raises: checks when free, otherwise calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl DecisionProvider for CallingStation {
    fn get_action(&mut self, view: &TurnView) -> Action {
        if view.can(ActionKind::Reveal) {
            Action::Reveal
        } else if view.can(ActionKind::Check) {
            Action::Check
        } else {
            Action::Call
        }
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}

/// Picks uniformly among the offered action kinds; bets and raises land
/// anywhere between the minimum and the whole stack.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha8Rng,
}

impl RandomAI {
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn amount(&mut self, view: &TurnView) -> Amount {
        let stack = view.chips + view.player_current_bet;
        if stack <= view.min_bet || self.rng.random_bool(0.1) {
            return Amount::AllIn;
        }
        Amount::Chips(self.rng.random_range(view.min_bet..=stack))
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionProvider for RandomAI {
    fn get_action(&mut self, view: &TurnView) -> Action {
        if view.available.is_empty() {
            return Action::Fold;
        }
        let pick = self.rng.random_range(0..view.available.len());
        match view.available[pick] {
            ActionKind::Fold => Action::Fold,
            ActionKind::Check => Action::Check,
            ActionKind::Call => Action::Call,
            ActionKind::Bet => Action::Bet(self.amount(view)),
            ActionKind::Raise => Action::Raise(self.amount(view)),
            ActionKind::Reveal => Action::Reveal,
            ActionKind::Hide => Action::Hide,
        }
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
