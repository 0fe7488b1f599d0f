use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// The cards not yet dealt this hand. Draws are spend-once: the deck is never
/// refilled mid-hand and drawing past the last card is an error.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// An unshuffled 52-card deck in suit-major order.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// A full deck shuffled with any uniform random source.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// A deck that deals exactly `cards`, front first. Used to rig hands.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// Uniformly permutes the cards that have not been drawn yet.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.position..].shuffle(rng);
    }

    pub fn draw(&mut self) -> Result<Card, EngineError> {
        let c = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(EngineError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if self.remaining() < n {
            return Err(EngineError::DeckExhausted);
        }
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
