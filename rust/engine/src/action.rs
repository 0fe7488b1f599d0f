use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of a bet or raise: an explicit chip total, or everything the player
/// has left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Amount {
    Chips(u32),
    AllIn,
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Chips(n) => write!(f, "{}", n),
            Amount::AllIn => write!(f, "all-in"),
        }
    }
}

/// A decision submitted for one seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Give up the hand
    Fold,
    /// Pass with nothing to call
    Check,
    /// Match the current bet, or go all-in for less
    Call,
    /// Open the betting at the given total
    Bet(Amount),
    /// Raise *to* the given total (not by it)
    Raise(Amount),
    /// Show the hand at showdown
    Reveal,
    /// Keep the hand hidden at showdown
    Hide,
}

/// Payload-free action tag, used for legal-action sets and error reporting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    Reveal,
    Hide,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
            Action::Raise(_) => ActionKind::Raise,
            Action::Reveal => ActionKind::Reveal,
            Action::Hide => ActionKind::Hide,
        }
    }

    /// Parses user text such as `fold`, `call`, `bet 20`, `raise all`.
    pub fn parse(input: &str) -> Result<Action, ParseActionError> {
        let mut parts = input.split_whitespace();
        let verb = parts
            .next()
            .ok_or(ParseActionError::Empty)?
            .to_ascii_lowercase();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(ParseActionError::TrailingInput(input.trim().to_string()));
        }

        let action = match verb.as_str() {
            "fold" | "f" => Action::Fold,
            "check" | "x" => Action::Check,
            "call" | "c" => Action::Call,
            "reveal" | "show" => Action::Reveal,
            "hide" | "muck" => Action::Hide,
            "allin" | "all-in" | "shove" => Action::Raise(Amount::AllIn),
            "bet" | "b" => Action::Bet(parse_amount(&verb, arg)?),
            "raise" | "r" => Action::Raise(parse_amount(&verb, arg)?),
            _ => return Err(ParseActionError::UnknownAction(verb)),
        };

        let takes_amount = matches!(action.kind(), ActionKind::Bet | ActionKind::Raise);
        if !takes_amount && arg.is_some() {
            return Err(ParseActionError::UnexpectedAmount(verb));
        }
        Ok(action)
    }
}

fn parse_amount(verb: &str, arg: Option<&str>) -> Result<Amount, ParseActionError> {
    let arg = arg.ok_or_else(|| ParseActionError::MissingAmount(verb.to_string()))?;
    if matches!(arg.to_ascii_lowercase().as_str(), "all" | "allin" | "all-in") {
        return Ok(Amount::AllIn);
    }
    match arg.parse::<u32>() {
        Ok(0) => Err(ParseActionError::InvalidAmount(arg.to_string())),
        Ok(n) => Ok(Amount::Chips(n)),
        Err(_) => Err(ParseActionError::InvalidAmount(arg.to_string())),
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Bet(a) => write!(f, "bet {}", a),
            Action::Raise(a) => write!(f, "raise {}", a),
            Action::Reveal => write!(f, "reveal"),
            Action::Hide => write!(f, "hide"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("empty action")]
    Empty,
    #[error("unknown action {0:?}")]
    UnknownAction(String),
    #[error("{0} requires an amount")]
    MissingAmount(String),
    #[error("invalid amount {0:?}: expected a positive whole number or 'all'")]
    InvalidAmount(String),
    #[error("{0} does not take an amount")]
    UnexpectedAmount(String),
    #[error("unexpected trailing input in {0:?}")]
    TrailingInput(String),
}
