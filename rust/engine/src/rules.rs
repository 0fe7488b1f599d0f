use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionKind, Amount};
use crate::betting::{BettingRound, Stage};
use crate::errors::ActionError;
use crate::player::Player;

/// An action that passed validation, with sizes resolved to chip totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips added to match the bet; less than the gap means all-in
    Call(u32),
    /// Opening bet, as the new stage total
    Bet { to: u32 },
    /// Raise, as the new stage total
    Raise { to: u32 },
    Reveal,
    Hide,
}

impl ValidatedAction {
    /// Chips this action moves from the player's stack into the pot.
    pub fn chips_in(&self, player: &Player) -> u32 {
        match *self {
            ValidatedAction::Call(n) => n,
            ValidatedAction::Bet { to } | ValidatedAction::Raise { to } => {
                to.saturating_sub(player.current_bet)
            }
            _ => 0,
        }
    }
}

/// Validates `action` for `seat` without touching any state.
///
/// Checks run in a fixed order and stop at the first failure: turn order,
/// folded, already acted this stage, then legality of the action kind.
///
/// # Examples
///
/// ```
/// use holdem_engine::action::{Action, Amount};
/// use holdem_engine::betting::BettingRound;
/// use holdem_engine::errors::ActionError;
/// use holdem_engine::player::Player;
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// let mut round = BettingRound::new(10);
/// round.current_bet = 50;
/// round.min_bet = 100;
/// let short = Player::new("short", 20);
///
/// // calling for more than the stack goes all-in for the rest
/// assert_eq!(
///     validate_action(0, &short, &round, Action::Call),
///     Ok(ValidatedAction::Call(20))
/// );
/// assert!(matches!(
///     validate_action(0, &short, &round, Action::Check),
///     Err(ActionError::CheckWithOutstandingBet { to_call: 50 })
/// ));
/// assert!(matches!(
///     validate_action(1, &short, &round, Action::Raise(Amount::AllIn)),
///     Err(ActionError::OutOfTurn { expected: 0, actual: 1 })
/// ));
/// ```
pub fn validate_action(
    seat: usize,
    player: &Player,
    round: &BettingRound,
    action: Action,
) -> Result<ValidatedAction, ActionError> {
    if seat != round.current_player_index {
        return Err(ActionError::OutOfTurn {
            expected: round.current_player_index,
            actual: seat,
        });
    }
    if player.folded {
        return Err(ActionError::AlreadyFolded);
    }
    let to_call = round.to_call(player);
    if player.spoke && (round.stage == Stage::Showdown || to_call == 0) {
        return Err(ActionError::AlreadyActedThisStage);
    }

    let invalid = || ActionError::InvalidActionType {
        action: action.kind(),
        stage: round.stage,
    };
    if round.stage == Stage::Showdown {
        return match action {
            Action::Reveal => Ok(ValidatedAction::Reveal),
            Action::Hide => Ok(ValidatedAction::Hide),
            _ => Err(invalid()),
        };
    }

    let stack = player.chips + player.current_bet;
    match action {
        Action::Fold => Ok(ValidatedAction::Fold),
        Action::Check if to_call == 0 => Ok(ValidatedAction::Check),
        Action::Check => Err(ActionError::CheckWithOutstandingBet { to_call }),
        Action::Call if to_call == 0 => Err(invalid()),
        Action::Call => Ok(ValidatedAction::Call(to_call.min(player.chips))),
        Action::Bet(_) if round.current_bet != 0 => Err(ActionError::BetNotAllowedWithOpenBet),
        Action::Bet(amount) => {
            let to = resolve(amount, stack);
            check_size(to, player, round)?;
            Ok(ValidatedAction::Bet { to })
        }
        // Going all-in with no bet open is an opening bet of the whole stack.
        Action::Raise(Amount::AllIn) if round.current_bet == 0 => {
            check_size(stack, player, round)?;
            Ok(ValidatedAction::Bet { to: stack })
        }
        Action::Raise(_) if round.current_bet == 0 => Err(invalid()),
        Action::Raise(Amount::AllIn) if stack <= round.current_bet => {
            Ok(ValidatedAction::Call(player.chips))
        }
        Action::Raise(amount) => {
            let to = resolve(amount, stack);
            check_size(to, player, round)?;
            Ok(ValidatedAction::Raise { to })
        }
        Action::Reveal | Action::Hide => Err(invalid()),
    }
}

fn resolve(amount: Amount, stack: u32) -> u32 {
    match amount {
        Amount::Chips(n) => n,
        Amount::AllIn => stack,
    }
}

/// A total must be affordable and reach `min_bet`, unless it puts the player all-in.
fn check_size(to: u32, player: &Player, round: &BettingRound) -> Result<(), ActionError> {
    let stack = player.chips + player.current_bet;
    if to > stack {
        return Err(ActionError::InsufficientChips {
            needed: to - player.current_bet,
            available: player.chips,
        });
    }
    if to <= player.current_bet || (to < round.min_bet && to != stack) {
        return Err(ActionError::BelowMinimumBet {
            amount: to,
            minimum: round.min_bet,
        });
    }
    Ok(())
}

/// Legal action kinds offered to a decision provider.
pub fn available_actions(stage: Stage, current_bet: u32, player_current_bet: u32) -> Vec<ActionKind> {
    if stage == Stage::Showdown {
        vec![ActionKind::Reveal, ActionKind::Hide]
    } else if current_bet == 0 {
        vec![ActionKind::Bet, ActionKind::Check]
    } else if player_current_bet >= current_bet {
        vec![ActionKind::Raise, ActionKind::Check]
    } else {
        vec![ActionKind::Raise, ActionKind::Call, ActionKind::Fold]
    }
}

/// The passive action applied when a provider keeps submitting illegal actions.
pub fn fallback_action(stage: Stage, to_call: u32) -> Action {
    match stage {
        Stage::Showdown => Action::Hide,
        _ if to_call == 0 => Action::Check,
        _ => Action::Fold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facing(current_bet: u32, min_bet: u32) -> BettingRound {
        let mut r = BettingRound::new(10);
        r.current_bet = current_bet;
        r.min_bet = min_bet;
        r
    }

    #[test]
    fn short_all_in_raise_is_accepted_below_minimum() {
        let round = facing(50, 100);
        let p = Player::new("p", 70);
        assert_eq!(
            validate_action(0, &p, &round, Action::Raise(Amount::AllIn)),
            Ok(ValidatedAction::Raise { to: 70 })
        );
        assert!(matches!(
            validate_action(0, &p, &round, Action::Raise(Amount::Chips(60))),
            Err(ActionError::BelowMinimumBet { amount: 60, minimum: 100 })
        ));
    }

    #[test]
    fn all_in_for_less_than_the_bet_is_a_call() {
        let round = facing(50, 100);
        let p = Player::new("p", 30);
        assert_eq!(
            validate_action(0, &p, &round, Action::Raise(Amount::AllIn)),
            Ok(ValidatedAction::Call(30))
        );
    }

    #[test]
    fn raise_without_open_bet_is_wrong_kind() {
        let round = facing(0, 10);
        let p = Player::new("p", 100);
        assert!(matches!(
            validate_action(0, &p, &round, Action::Raise(Amount::Chips(20))),
            Err(ActionError::InvalidActionType {
                action: ActionKind::Raise,
                ..
            })
        ));
    }

    #[test]
    fn all_in_with_no_open_bet_is_an_opening_bet() {
        let round = facing(0, 10);
        let p = Player::new("p", 80);
        assert_eq!(
            validate_action(0, &p, &round, Action::Raise(Amount::AllIn)),
            Ok(ValidatedAction::Bet { to: 80 })
        );
    }

    #[test]
    fn fallback_is_check_or_fold() {
        assert_eq!(fallback_action(Stage::Flop, 0), Action::Check);
        assert_eq!(fallback_action(Stage::Flop, 5), Action::Fold);
        assert_eq!(fallback_action(Stage::Showdown, 0), Action::Hide);
    }
}
