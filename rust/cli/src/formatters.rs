//! Card, board, table and action formatters for terminal display.
//!
//! Suits render as Unicode symbols (♥ ♦ ♣ ♠) when the terminal is likely to
//! support them and fall back to the `h d c s` letters otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use std::fmt::Write as _;

use holdem_engine::action::ActionKind;
use holdem_engine::cards::{Card, Suit};
use holdem_engine::game::HandResult;
use holdem_engine::hand::score_category;
use holdem_engine::rules::ValidatedAction;
use holdem_engine::state::GameState;

/// Windows consoles only get symbols inside modern terminals; everything else
/// is assumed to handle them.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> char {
    if supports_unicode() {
        suit.symbol()
    } else {
        suit.letter()
    }
}

/// "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Bracketed, space separated: "[A♠ K♥ Q♦]", or "[]" for no cards.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// What a seat did, with chip totals resolved: "calls 20", "raises to 60".
pub fn format_action(action: &ValidatedAction) -> String {
    match *action {
        ValidatedAction::Fold => "folds".to_string(),
        ValidatedAction::Check => "checks".to_string(),
        ValidatedAction::Call(n) => format!("calls {}", n),
        ValidatedAction::Bet { to } => format!("bets {}", to),
        ValidatedAction::Raise { to } => format!("raises to {}", to),
        ValidatedAction::Reveal => "shows".to_string(),
        ValidatedAction::Hide => "mucks".to_string(),
    }
}

/// The prompt word for an action kind.
pub fn action_word(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Fold => "fold",
        ActionKind::Check => "check",
        ActionKind::Call => "call",
        ActionKind::Bet => "bet N",
        ActionKind::Raise => "raise N",
        ActionKind::Reveal => "reveal",
        ActionKind::Hide => "hide",
    }
}

/// Multi-line table view: a header, the board, then one row per seat.
/// The seat to act is marked with `>`; hidden hole cards show as `?? ??`.
pub fn format_table(state: &GameState) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Hand #{}  {}  Pot: {}  Bet: {}",
        state.hand_number,
        state.stage_name(),
        state.pot,
        state.current_bet
    );
    let _ = writeln!(s, "Board: {}", format_board(&state.community_cards));
    let name_width = state
        .players
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    for p in &state.players {
        let marker = if state.current_player == Some(p.seat) { '>' } else { ' ' };
        let cards = match &p.hole_cards {
            Some(cards) if !cards.is_empty() => format_board(cards),
            Some(_) => "[]".to_string(),
            None => "[?? ??]".to_string(),
        };
        let mut status = String::new();
        if p.folded {
            status.push_str("  folded");
        } else if p.all_in {
            status.push_str("  all-in");
        }
        let _ = writeln!(
            s,
            "{} P{} {:<width$}  {:<5} chips {:>6}  bet {:>5}  {}{}",
            marker,
            p.seat,
            p.name,
            p.position,
            p.chips,
            p.current_bet,
            cards,
            status,
            width = name_width
        );
    }
    s
}

/// One line per winner, naming the winning category when hands were scored.
pub fn format_result(result: &HandResult, names: &[String]) -> String {
    let mut s = String::new();
    for &(seat, amount) in &result.payouts {
        let name = names.get(seat).map(String::as_str).unwrap_or("?");
        let hand = result
            .scores
            .iter()
            .find(|&&(scored, _)| scored == seat)
            .and_then(|&(_, score)| score_category(score))
            .map(|(category, _)| format!(" with {}", category.name()))
            .unwrap_or_default();
        let _ = writeln!(s, "{} (P{}) wins {}{}", name, seat, amount, hand);
    }
    s
}
