//! # holdem-engine: Texas Hold'em Rules Engine
//!
//! A turn-based rules engine for one multi-player Texas Hold'em table. It
//! tracks chip stacks, enforces turn order, validates and applies wagering
//! actions, deals community cards, ranks hands at showdown and pays out the
//! pot. It performs no terminal or file I/O: rendering, input and persistence
//! are left to the caller through [`state::GameState`],
//! [`decision::DecisionProvider`] and the [`history`] buffer.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and notation
//! - [`deck`] - Shuffled, spend-once deck with an injectable random source
//! - [`hand`] - Hole + community cards and the hand-ranking score
//! - [`player`] - Per-seat chips, bets and flags
//! - [`action`] - Action type and text parsing
//! - [`rules`] - Fail-fast action validation and legal-action sets
//! - [`betting`] - Stage state machine and betting-round bookkeeping
//! - [`table`] - Dealer / blind rotation and seat names
//! - [`pot`] - Pot division among tied winners
//! - [`game`] - The controller that runs hands end to end
//! - [`state`] - Read-model snapshots for renderers and decision providers
//! - [`history`] - Line-notation hand history
//! - [`errors`] - Rejections and engine errors
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::action::Action;
//! use holdem_engine::game::{Game, GameConfig};
//! use holdem_engine::player::Player;
//!
//! let config = GameConfig { small_blind: 1, big_blind: 2, seed: Some(42), ..GameConfig::default() };
//! let players = vec![Player::new("alice", 100), Player::new("bob", 100)];
//! let mut game = Game::new(config, players).unwrap();
//! game.start_new_hand().unwrap();
//!
//! // heads-up, the dealer posts the small blind and acts first
//! let seat = game.current_player().unwrap();
//! let outcome = game.apply_action(seat, Action::Fold).unwrap();
//! assert!(outcome.hand_over);
//! assert_eq!(game.total_chips(), 200);
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate_cards, score_category, Category};
//!
//! let cards = parse_cards("Ah Ad Kc Ks 2d 7h 9c").unwrap();
//! let score = evaluate_cards(&cards);
//! assert_eq!(score_category(score), Some((Category::TwoPair, 14)));
//! ```

pub mod action;
pub mod betting;
pub mod cards;
pub mod decision;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;
pub mod pot;
pub mod rules;
pub mod state;
pub mod table;
