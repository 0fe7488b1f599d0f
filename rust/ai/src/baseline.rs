//! Baseline AI for simulations.
//!
//! A deterministic, rule-based opponent: preflop it rates the two hole cards,
//! postflop it scores the made hand, and facing a bet it weighs pot odds.

use holdem_engine::action::{Action, ActionKind, Amount};
use holdem_engine::betting::Stage;
use holdem_engine::cards::Card;
use holdem_engine::decision::DecisionProvider;
use holdem_engine::hand::{evaluate_cards, score_category, Category};
use holdem_engine::state::TurnView;

/// Rule-based strategy used as the default opponent.
///
/// **Preflop:** premium pairs and big aces raise, medium hands call cheap
/// bets, the rest check or fold.
///
/// **Postflop:** two pair or better bets and calls, one pair calls small bets,
/// weak hands fold unless the price is right.
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineAI;
/// use holdem_engine::decision::DecisionProvider;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Preflop strength from 0 (trash) to 10 (AA, KK, AKs).
    fn preflop_strength(hole: &[Card]) -> u8 {
        let [c1, c2] = hole else {
            return 0;
        };
        let (r1, r2) = (c1.rank.value(), c2.rank.value());
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = c1.suit == c2.suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop strength from the made hand, or `None` before the flop.
    fn postflop_strength(hole: &[Card], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let (category, tiebreak) = score_category(evaluate_cards(&cards))?;

        let base = match category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        let high_boost = u8::from(tiebreak >= 12);
        Some((base + high_boost).min(10))
    }

    /// Share of the final pot that calling would buy: pot / (pot + call).
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    /// Total to bet or raise to, at least the legal minimum and at most the stack.
    fn size(view: &TurnView, extra: u32) -> Amount {
        let stack = view.chips + view.player_current_bet;
        let target = (view.current_bet + extra).max(view.min_bet);
        if target >= stack {
            Amount::AllIn
        } else {
            Amount::Chips(target)
        }
    }

    fn decide(strength: u8, view: &TurnView) -> Action {
        let to_call = view.to_call();
        let pot = view.pot;

        if to_call == 0 {
            return match strength {
                9..=10 if view.can(ActionKind::Bet) => Action::Bet(Self::size(view, pot * 2 / 3)),
                7..=8 if view.can(ActionKind::Bet) => Action::Bet(Self::size(view, pot / 2)),
                9..=10 if view.can(ActionKind::Raise) => Action::Raise(Self::size(view, pot / 2)),
                _ => Action::Check,
            };
        }

        if to_call >= view.chips {
            return if strength >= 7 { Action::Call } else { Action::Fold };
        }

        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => {
                let stack = view.chips + view.player_current_bet;
                if stack > view.min_bet {
                    Action::Raise(Self::size(view, pot / 2))
                } else {
                    Action::Call
                }
            }
            7..=8 => Action::Call,
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => Action::Call,
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => Action::Call,
            _ => Action::Fold,
        }
    }
}

impl DecisionProvider for BaselineAI {
    fn get_action(&mut self, view: &TurnView) -> Action {
        if view.stage == Stage::Showdown {
            return Action::Reveal;
        }
        if view.hole_cards.len() < 2 {
            return if view.to_call() == 0 { Action::Check } else { Action::Fold };
        }

        let strength = match view.stage {
            Stage::Preflop => Self::preflop_strength(&view.hole_cards),
            _ => Self::postflop_strength(&view.hole_cards, &view.community_cards)
                .unwrap_or_else(|| Self::preflop_strength(&view.hole_cards)),
        };
        Self::decide(strength, view)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;
    use holdem_engine::rules::available_actions;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).expect("valid cards")
    }

    fn view(stage: Stage, hole: &str, board: &str, current_bet: u32, mine: u32) -> TurnView {
        TurnView {
            seat: 0,
            stage,
            pot: 60,
            current_bet,
            min_bet: if current_bet == 0 { 10 } else { current_bet * 2 },
            big_blind: 10,
            player_current_bet: mine,
            chips: 500,
            hole_cards: cards(hole),
            community_cards: cards(board),
            opponents: 1,
            available: available_actions(stage, current_bet, mine),
        }
    }

    #[test]
    fn preflop_ratings() {
        assert_eq!(BaselineAI::preflop_strength(&cards("Ah As")), 10);
        assert_eq!(BaselineAI::preflop_strength(&cards("Kh Ks")), 10);
        assert_eq!(BaselineAI::preflop_strength(&cards("Ah Kh")), 10);
        assert_eq!(BaselineAI::preflop_strength(&cards("Ah Ks")), 8);
        assert!(BaselineAI::preflop_strength(&cards("7h 2s")) <= 3);
        assert!((4..=6).contains(&BaselineAI::preflop_strength(&cards("9h 8h"))));
    }

    #[test]
    fn postflop_rating_needs_a_flop() {
        assert_eq!(BaselineAI::postflop_strength(&cards("Ah As"), &cards("Kd")), None);
        let trips = BaselineAI::postflop_strength(&cards("Ah As"), &cards("Ad Kc 7h"));
        assert!(trips.is_some_and(|s| s >= 6));
    }

    #[test]
    fn pot_odds() {
        assert!((BaselineAI::pot_odds(100, 50) - 0.667).abs() < 0.01);
        assert_eq!(BaselineAI::pot_odds(100, 0), 1.0);
    }

    #[test]
    fn raises_premium_hands_and_folds_trash() {
        let mut ai = BaselineAI::new();
        let strong = view(Stage::Preflop, "Ah As", "", 20, 0);
        assert_eq!(ai.get_action(&strong), Action::Raise(Amount::Chips(50)));

        let weak = view(Stage::Preflop, "7h 2s", "", 20, 0);
        assert_eq!(ai.get_action(&weak), Action::Fold);
    }

    #[test]
    fn bets_made_hands_and_checks_air() {
        let mut ai = BaselineAI::new();
        let made = view(Stage::Flop, "Ah As", "Ad Kc 7h", 0, 0);
        assert_eq!(ai.get_action(&made), Action::Bet(Amount::Chips(30)));

        let air = view(Stage::Flop, "9h 2s", "Ad Kc 7h", 0, 0);
        assert_eq!(ai.get_action(&air), Action::Check);
    }

    #[test]
    fn always_reveals_at_showdown() {
        let mut ai = BaselineAI::new();
        let v = view(Stage::Showdown, "7h 2s", "Ad Kc 7h 4d 3s", 0, 0);
        assert_eq!(ai.get_action(&v), Action::Reveal);
    }
}
