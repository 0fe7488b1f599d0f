use thiserror::Error;

use crate::action::ActionKind;
use crate::betting::Stage;

/// Recoverable rejection of a player action.
///
/// Every rejection is raised before any state is touched, so retrying the same
/// call yields the same error against the same state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("it's not seat {actual}'s turn (expected seat {expected})")]
    OutOfTurn { expected: usize, actual: usize },
    #[error("player has already folded this hand")]
    AlreadyFolded,
    #[error("player has already acted this stage")]
    AlreadyActedThisStage,
    #[error("cannot bet while a bet is open; call or raise instead")]
    BetNotAllowedWithOpenBet,
    #[error("amount {amount} is below the minimum of {minimum}")]
    BelowMinimumBet { amount: u32, minimum: u32 },
    #[error("insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("cannot check facing a bet of {to_call}")]
    CheckWithOutstandingBet { to_call: u32 },
    #[error("{action:?} is not allowed during {stage:?}")]
    InvalidActionType { action: ActionKind, stage: Stage },
}

/// Errors surfaced by the game controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("action rejected: {0}")]
    Rejected(#[from] ActionError),
    #[error("deck exhausted")]
    DeckExhausted,
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("not enough funded players to deal ({live} live)")]
    NotEnoughPlayers { live: usize },
    #[error("{seats} seats exceeds the maximum of {max}")]
    TooManySeats { seats: usize, max: usize },
    #[error("hole cards already full")]
    HoleCardsFull,
    #[error("board already holds five cards")]
    BoardFull,
    #[error("{providers} decision providers for {seats} seats")]
    ProviderMismatch { providers: usize, seats: usize },
    #[error("invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: u32, big: u32 },
    #[error("table holds {total} chips, more than the maximum of {max}")]
    ChipOverflow { total: u64, max: u32 },
}

impl EngineError {
    /// Fatal errors abort the hand in progress; everything else leaves it intact.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::DeckExhausted)
    }
}
