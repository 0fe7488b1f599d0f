//! `eval`: scores 5 to 7 cards given in notation.

use std::io::Write;

use holdem_engine::cards::Card;
use holdem_engine::hand::{evaluate_cards, score_category, MIN_EVALUABLE};

use crate::error::CliError;
use crate::formatters::format_board;

const MAX_EVALUABLE: usize = 7;

pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    // Accept both `Ah Kd` and `"Ah Kd"` forms
    let parsed = cards
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(|token| token.parse::<Card>())
        .collect::<Result<Vec<Card>, _>>()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    if !(MIN_EVALUABLE..=MAX_EVALUABLE).contains(&parsed.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected {} to {} cards, got {}",
            MIN_EVALUABLE,
            MAX_EVALUABLE,
            parsed.len()
        )));
    }
    for (i, card) in parsed.iter().enumerate() {
        if parsed[..i].contains(card) {
            return Err(CliError::InvalidInput(format!("duplicate card {}", card)));
        }
    }

    let score = evaluate_cards(&parsed);
    let Some((category, tiebreak)) = score_category(score) else {
        return Err(CliError::InvalidInput("cards could not be scored".to_string()));
    };
    writeln!(out, "Cards: {}", format_board(&parsed))?;
    writeln!(out, "Category: {}", category.name())?;
    writeln!(out, "Tiebreak: {}", tiebreak)?;
    writeln!(out, "Score: {}", score)?;
    Ok(())
}
