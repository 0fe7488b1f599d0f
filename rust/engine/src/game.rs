use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::action::Action;
use crate::betting::{BettingRound, Stage};
use crate::cards::Card;
use crate::deck::Deck;
use crate::decision::DecisionProvider;
use crate::errors::{ActionError, EngineError};
use crate::history::{Blind, History};
use crate::player::Player;
use crate::pot::split_pot;
use crate::rules::{self, ValidatedAction};
use crate::state::{GameState, SeatView, TurnView, Viewer};
use crate::table::{seat_name, Positions};

pub const MIN_SEATS: usize = 2;
/// 23 seats × 2 hole cards + 5 community cards fit in one deck.
pub const MAX_SEATS: usize = 23;

/// Table stakes and engine knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Shuffle seed; `None` draws a random one
    pub seed: Option<u64>,
    /// Rejected attempts per turn before [`Game::play_hand`] applies a fallback
    pub max_retries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
            seed: None,
            max_retries: 3,
        }
    }
}

/// How a finished hand was settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_number: u32,
    pub pot: u32,
    /// `(seat, chips won)` in seat order
    pub payouts: Vec<(usize, u32)>,
    /// `(seat, score)` for every hand compared at showdown
    pub scores: Vec<(usize, u32)>,
    /// Everyone else folded; no hands were compared
    pub uncontested: bool,
    pub board: Vec<Card>,
}

impl HandResult {
    pub fn winners(&self) -> Vec<usize> {
        self.payouts.iter().map(|&(seat, _)| seat).collect()
    }
}

/// What an accepted action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub seat: usize,
    /// The action as applied; a declined reveal is reported as `Hide`
    pub applied: ValidatedAction,
    pub chips_in: u32,
    pub all_in: bool,
    /// Stage after the action and any stages it completed
    pub stage: Stage,
    pub hand_over: bool,
}

/// The aggregate root: owns the seats, the deck, the betting round and the
/// history for a whole session, one hand at a time.
///
/// Every mutation goes through [`Game::start_new_hand`] and
/// [`Game::apply_action`]. A rejected action leaves the game untouched.
///
/// # Examples
///
/// ```
/// use holdem_engine::game::{Game, GameConfig};
/// use holdem_engine::player::Player;
///
/// let config = GameConfig { small_blind: 1, big_blind: 2, seed: Some(7), ..GameConfig::default() };
/// let players = vec![Player::new("alice", 100), Player::new("bob", 100)];
/// let mut game = Game::new(config, players).unwrap();
///
/// game.start_new_hand().unwrap();
/// assert_eq!(game.round().pot, 3);
/// assert_eq!(game.round().current_bet, 2);
/// assert_eq!(game.total_chips(), 200);
/// ```
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    positions: Positions,
    round: BettingRound,
    deck: Deck,
    board: Vec<Card>,
    hand_number: u32,
    in_progress: bool,
    rng: Box<dyn RngCore>,
    history: History,
    last_result: Option<HandResult>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("players", &self.players)
            .field("positions", &self.positions)
            .field("round", &self.round)
            .field("board", &self.board)
            .field("hand_number", &self.hand_number)
            .field("in_progress", &self.in_progress)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a session whose decks are shuffled by a ChaCha20 generator
    /// seeded from `config.seed`.
    pub fn new(config: GameConfig, players: Vec<Player>) -> Result<Self, EngineError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, players, Box::new(ChaCha20Rng::seed_from_u64(seed)))
    }

    /// Creates a session that shuffles with the given random source.
    pub fn with_rng(
        config: GameConfig,
        players: Vec<Player>,
        rng: Box<dyn RngCore>,
    ) -> Result<Self, EngineError> {
        if players.len() < MIN_SEATS {
            return Err(EngineError::NotEnoughPlayers {
                live: players.len(),
            });
        }
        if players.len() > MAX_SEATS {
            return Err(EngineError::TooManySeats {
                seats: players.len(),
                max: MAX_SEATS,
            });
        }
        if config.small_blind == 0 || config.big_blind < config.small_blind {
            return Err(EngineError::InvalidBlinds {
                small: config.small_blind,
                big: config.big_blind,
            });
        }
        // Pots and payouts are u32, so the whole table must fit in one.
        let total: u64 = players.iter().map(|p| u64::from(p.chips)).sum();
        if total > u64::from(u32::MAX) {
            return Err(EngineError::ChipOverflow {
                total,
                max: u32::MAX,
            });
        }

        let live: Vec<bool> = players.iter().map(|p| p.chips > 0).collect();
        Ok(Self {
            config,
            positions: Positions::with_live(&live),
            round: BettingRound::new(config.big_blind),
            deck: Deck::new(),
            board: Vec::with_capacity(5),
            hand_number: 0,
            in_progress: false,
            rng,
            history: History::new(),
            last_result: None,
            players,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    pub fn round(&self) -> &BettingRound {
        &self.round
    }
    pub fn stage(&self) -> Stage {
        self.round.stage
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn positions(&self) -> &Positions {
        &self.positions
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn is_hand_in_progress(&self) -> bool {
        self.in_progress
    }
    pub fn last_result(&self) -> Option<&HandResult> {
        self.last_result.as_ref()
    }

    /// Seat whose decision the hand is waiting on.
    pub fn current_player(&self) -> Option<usize> {
        self.in_progress.then_some(self.round.current_player_index)
    }

    /// True between hands once fewer than two seats have chips.
    pub fn is_game_over(&self) -> bool {
        !self.in_progress && self.live_seats() < MIN_SEATS
    }

    /// Chips behind plus the pot; constant for the whole session.
    pub fn total_chips(&self) -> u32 {
        self.players.iter().map(|p| p.chips).sum::<u32>() + self.round.pot
    }

    pub fn history(&self) -> &str {
        self.history.as_str()
    }

    /// Hands the finished history lines to the caller and clears them.
    pub fn take_history(&mut self) -> String {
        self.history.take()
    }

    /// Shuffles a fresh deck with the session's random source and deals.
    pub fn start_new_hand(&mut self) -> Result<(), EngineError> {
        let deck = Deck::shuffled(&mut *self.rng);
        self.start_hand_with_deck(deck)
    }

    /// Starts the next hand dealing from `deck` exactly as given.
    pub fn start_hand_with_deck(&mut self, deck: Deck) -> Result<(), EngineError> {
        if self.in_progress {
            return Err(EngineError::HandInProgress);
        }
        let live: Vec<bool> = self.players.iter().map(|p| p.chips > 0).collect();
        let live_count = live.iter().filter(|&&l| l).count();
        if live_count < MIN_SEATS {
            return Err(EngineError::NotEnoughPlayers { live: live_count });
        }

        self.hand_number += 1;
        if self.hand_number > 1 {
            self.positions.rotate_among(&live);
        }
        let stacks: Vec<u32> = self.players.iter().map(|p| p.chips).collect();
        for p in &mut self.players {
            p.reset_for_hand();
        }
        self.deck = deck;
        self.board.clear();
        self.round = BettingRound::new(self.config.big_blind);
        self.last_result = None;
        self.in_progress = true;
        self.history
            .begin_hand(self.hand_number, &stacks, self.positions.dealer);
        info!(
            hand = self.hand_number,
            dealer = self.positions.dealer,
            small_blind = self.positions.small_blind,
            big_blind = self.positions.big_blind,
            "hand started"
        );

        self.post_blind(self.positions.small_blind, Blind::Small);
        self.post_blind(self.positions.big_blind, Blind::Big);

        if let Err(e) = self.deal_hole_cards() {
            self.abort_hand(&e);
            return Err(e);
        }
        let first = self.positions.first_to_act_preflop();
        self.run_forward(first)
    }

    /// Validates and applies one action, then moves the hand forward: next
    /// seat, next stage (dealing community cards), or settlement.
    ///
    /// A rejection is returned as [`EngineError::Rejected`] and changes nothing.
    pub fn apply_action(&mut self, seat: usize, action: Action) -> Result<ActionOutcome, EngineError> {
        if !self.in_progress {
            return Err(EngineError::NoHandInProgress);
        }
        let player = self.players.get(seat).ok_or(ActionError::OutOfTurn {
            expected: self.round.current_player_index,
            actual: seat,
        })?;
        let validated = match rules::validate_action(seat, player, &self.round, action) {
            Ok(v) => v,
            Err(e) => {
                warn!(seat, %action, error = %e, "action rejected");
                return Err(e.into());
            }
        };

        let (applied, chips_in) = self.execute(seat, validated);
        self.history.action(seat, &applied);
        debug!(seat, ?applied, chips_in, pot = self.round.pot, "action applied");

        let next = (seat + 1) % self.players.len();
        self.run_forward(next)?;

        Ok(ActionOutcome {
            seat,
            applied,
            chips_in,
            all_in: self.players[seat].is_all_in,
            stage: self.round.stage,
            hand_over: !self.in_progress,
        })
    }

    /// What the seat to act is shown by a decision provider.
    pub fn turn_view(&self) -> Option<TurnView> {
        let seat = self.current_player()?;
        let p = &self.players[seat];
        Some(TurnView {
            seat,
            stage: self.round.stage,
            pot: self.round.pot,
            current_bet: self.round.current_bet,
            min_bet: self.round.min_bet,
            big_blind: self.config.big_blind,
            player_current_bet: p.current_bet,
            chips: p.chips,
            hole_cards: p.hand.hole_cards().to_vec(),
            community_cards: self.board.clone(),
            opponents: self.active_count().saturating_sub(1),
            available: rules::available_actions(
                self.round.stage,
                self.round.current_bet,
                p.current_bet,
            ),
        })
    }

    /// Plays one full hand, asking `providers[seat]` for every decision.
    ///
    /// Every turn goes through [`Game::apply_with_retries`].
    pub fn play_hand(
        &mut self,
        providers: &mut [Box<dyn DecisionProvider>],
    ) -> Result<HandResult, EngineError> {
        if providers.len() != self.players.len() {
            return Err(EngineError::ProviderMismatch {
                providers: providers.len(),
                seats: self.players.len(),
            });
        }
        self.start_new_hand()?;

        while let Some(seat) = self.current_player() {
            self.apply_with_retries(providers[seat].as_mut())?;
        }

        self.last_result.clone().ok_or(EngineError::NoHandInProgress)
    }

    /// Asks `provider` for the current seat's action until one is accepted.
    ///
    /// Each rejection is passed to [`DecisionProvider::on_rejected`]; after
    /// `max_retries` of them the seat checks, folds or hides instead.
    pub fn apply_with_retries(
        &mut self,
        provider: &mut dyn DecisionProvider,
    ) -> Result<ActionOutcome, EngineError> {
        let view = self.turn_view().ok_or(EngineError::NoHandInProgress)?;
        let mut rejections = 0;
        loop {
            let action = provider.get_action(&view);
            match self.apply_action(view.seat, action) {
                Ok(outcome) => return Ok(outcome),
                Err(EngineError::Rejected(err)) => {
                    provider.on_rejected(&view, &err);
                    rejections += 1;
                    if rejections >= self.config.max_retries {
                        let fallback = rules::fallback_action(view.stage, view.to_call());
                        warn!(
                            seat = view.seat,
                            provider = provider.name(),
                            %fallback,
                            "retries exhausted, applying fallback"
                        );
                        return self.apply_action(view.seat, fallback);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Snapshot of the table as `viewer` may see it.
    pub fn snapshot(&self, viewer: Viewer) -> GameState {
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| SeatView {
                seat,
                name: p.name().to_string(),
                position: seat_name(seat, &self.positions),
                chips: p.chips,
                current_bet: p.current_bet,
                folded: p.folded,
                all_in: p.is_all_in,
                spoke: p.spoke,
                revealed: p.revealed,
                hole_cards: (viewer.sees(seat) || p.revealed)
                    .then(|| p.hand.hole_cards().to_vec()),
            })
            .collect();
        GameState {
            players,
            community_cards: self.board.clone(),
            pot: self.round.pot,
            current_bet: self.round.current_bet,
            min_bet: self.round.min_bet,
            stage: self.round.stage,
            dealer: self.positions.dealer,
            small_blind: self.positions.small_blind,
            big_blind: self.positions.big_blind,
            current_player: self.current_player(),
            hand_number: self.hand_number,
            game_over: self.is_game_over(),
            viewer,
        }
    }

    fn live_seats(&self) -> usize {
        self.players.iter().filter(|p| p.chips > 0).count()
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Forced bets: capped at the stack and never count as speaking.
    fn post_blind(&mut self, seat: usize, blind: Blind) {
        let amount = match blind {
            Blind::Small => self.config.small_blind,
            Blind::Big => self.config.big_blind,
        };
        let posted = self.players[seat].commit(amount);
        self.round.update_pot(posted);
        self.round.open_with_blind(self.players[seat].current_bet);
        self.history.blind(seat, blind, posted);
    }

    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        let n = self.players.len();
        let order: Vec<usize> = (0..n)
            .map(|k| (self.positions.small_blind + k) % n)
            .filter(|&s| self.players[s].is_active())
            .collect();
        for _ in 0..2 {
            for &seat in &order {
                let card = self.deck.draw()?;
                self.players[seat].hand.add_hole_card(card)?;
            }
        }
        Ok(())
    }

    /// Moves chips and flags for an already validated action.
    fn execute(&mut self, seat: usize, action: ValidatedAction) -> (ValidatedAction, u32) {
        let chips_in = action.chips_in(&self.players[seat]);
        let mut applied = action;
        match action {
            ValidatedAction::Fold => self.players[seat].folded = true,
            ValidatedAction::Check | ValidatedAction::Hide => {}
            ValidatedAction::Call(_) => {
                let moved = self.players[seat].commit(chips_in);
                self.round.update_pot(moved);
            }
            ValidatedAction::Bet { to } | ValidatedAction::Raise { to } => {
                let moved = self.players[seat].commit(chips_in);
                self.round.update_pot(moved);
                self.round.raise_to(to);
            }
            ValidatedAction::Reveal => {
                let score = self.players[seat].hand.evaluate();
                let beaten = self
                    .players
                    .iter()
                    .enumerate()
                    .any(|(i, o)| i != seat && o.revealed && o.hand.evaluate() > score);
                if beaten {
                    applied = ValidatedAction::Hide;
                } else {
                    self.players[seat].revealed = true;
                }
            }
        }
        self.players[seat].spoke = true;
        (applied, chips_in)
    }

    /// First seat at or after `start` (clockwise) matching `pred`.
    fn seek(&self, start: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|k| (start + k) % n)
            .find(|&s| pred(&self.players[s]))
    }

    /// Advances the hand until it waits on a decision or is settled.
    fn run_forward(&mut self, start: usize) -> Result<(), EngineError> {
        match self.drive(start) {
            Err(e) if e.is_fatal() => {
                self.abort_hand(&e);
                Err(e)
            }
            other => other,
        }
    }

    fn drive(&mut self, mut start: usize) -> Result<(), EngineError> {
        loop {
            if self.active_count() <= 1 {
                self.finish_uncontested();
                return Ok(());
            }

            if self.round.stage == Stage::Showdown {
                match self.seek(start, |p| p.is_active() && !p.spoke) {
                    Some(seat) => self.round.current_player_index = seat,
                    None => self.finish_showdown(),
                }
                return Ok(());
            }

            let bet = self.round.current_bet;
            let needs_to_act = |p: &Player| p.can_act() && (!p.spoke || p.current_bet < bet);
            let actors: Vec<&Player> = self.players.iter().filter(|p| p.can_act()).collect();
            let nobody_to_bet_against = match actors.as_slice() {
                [] => true,
                [only] => only.current_bet >= bet,
                _ => false,
            };

            if !self.round.is_complete(&self.players) && !nobody_to_bet_against {
                if let Some(seat) = self.seek(start, needs_to_act) {
                    self.round.current_player_index = seat;
                    return Ok(());
                }
            }

            self.advance_stage()?;
            start = self.positions.first_to_act_postflop();
        }
    }

    fn advance_stage(&mut self) -> Result<(), EngineError> {
        self.round.next_stage();
        for p in &mut self.players {
            p.reset_for_stage();
        }

        let stage = self.round.stage;
        let dealt = self.deck.draw_n(stage.cards_dealt())?;
        if !dealt.is_empty() {
            for &card in &dealt {
                self.board.push(card);
                for p in self.players.iter_mut().filter(|p| p.is_active()) {
                    p.hand.add_community_card(card)?;
                }
            }
            self.history
                .board(&dealt, self.round.pot, self.config.big_blind);
        }
        debug!(?stage, board = ?self.board, pot = self.round.pot, "stage advanced");
        Ok(())
    }

    fn finish_uncontested(&mut self) {
        let winners: Vec<usize> = (0..self.players.len())
            .filter(|&s| self.players[s].is_active())
            .collect();
        self.round.stage = Stage::Showdown;
        self.settle(winners, Vec::new(), true);
    }

    fn finish_showdown(&mut self) {
        let scores: Vec<(usize, u32)> = (0..self.players.len())
            .filter(|&s| self.players[s].is_active())
            .map(|s| (s, self.players[s].hand.evaluate()))
            .collect();
        let best = scores.iter().map(|&(_, score)| score).max().unwrap_or(0);
        let winners = scores
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(seat, _)| seat)
            .collect();
        self.settle(winners, scores, false);
    }

    fn settle(&mut self, winners: Vec<usize>, scores: Vec<(usize, u32)>, uncontested: bool) {
        let pot = self.round.pot;
        let payouts = split_pot(pot, &winners);
        for &(seat, amount) in &payouts {
            self.players[seat].add_chips(amount);
        }
        self.round.pot = 0;
        self.in_progress = false;
        self.history.winners(&payouts);
        self.history.end_hand();
        info!(hand = self.hand_number, pot, ?payouts, uncontested, "hand settled");
        self.last_result = Some(HandResult {
            hand_number: self.hand_number,
            pot,
            payouts,
            scores,
            uncontested,
            board: self.board.clone(),
        });
    }

    /// Ends the hand after a fatal error, returning every wager to its owner.
    fn abort_hand(&mut self, cause: &EngineError) {
        error!(hand = self.hand_number, error = %cause, "hand aborted");
        for p in &mut self.players {
            p.refund_committed();
        }
        self.round.pot = 0;
        self.in_progress = false;
        self.history.aborted();
        self.history.end_hand();
    }
}
