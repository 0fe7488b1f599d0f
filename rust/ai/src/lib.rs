//! # holdem-ai: Automated Decision Providers
//!
//! Strategies that plug into the engine through
//! [`DecisionProvider`](holdem_engine::decision::DecisionProvider). Each one
//! sees only the [`TurnView`](holdem_engine::state::TurnView) for its seat.
//!
//! ## Core Components
//!
//! - [`baseline`] - Rule-based strategy driven by hand strength and pot odds
//! - [`simple`] - Calling station and seeded random player
//! - [`create_ai`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::decision::DecisionProvider;
//! use holdem_engine::game::{Game, GameConfig};
//! use holdem_engine::player::Player;
//!
//! let config = GameConfig { seed: Some(42), ..GameConfig::default() };
//! let players = vec![Player::new("a", 1000), Player::new("b", 1000)];
//! let mut game = Game::new(config, players).unwrap();
//!
//! let mut seats: Vec<Box<dyn DecisionProvider>> =
//!     vec![create_ai("baseline").unwrap(), create_ai("station").unwrap()];
//! let result = game.play_hand(&mut seats).unwrap();
//! assert_eq!(result.hand_number, 1);
//! assert_eq!(game.total_chips(), 2000);
//! ```

use holdem_engine::decision::DecisionProvider;
use thiserror::Error;

pub mod baseline;
pub mod simple;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 3] = ["baseline", "station", "random"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown AI type {0:?} (expected one of: baseline, station, random)")]
pub struct UnknownAi(pub String);

/// Builds a decision provider by name.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn DecisionProvider>, UnknownAi> {
    create_ai_seeded(ai_type, None)
}

/// Like [`create_ai`], with a seed for strategies that use randomness.
pub fn create_ai_seeded(
    ai_type: &str,
    seed: Option<u64>,
) -> Result<Box<dyn DecisionProvider>, UnknownAi> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "baseline" => Ok(Box::new(baseline::BaselineAI::new())),
        "station" | "calling-station" => Ok(Box::new(simple::CallingStation)),
        "random" => Ok(Box::new(match seed {
            Some(s) => simple::RandomAI::from_seed(s),
            None => simple::RandomAI::new(),
        })),
        _ => Err(UnknownAi(ai_type.to_string())),
    }
}
