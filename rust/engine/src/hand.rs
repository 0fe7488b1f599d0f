use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

pub const MAX_HOLE_CARDS: usize = 2;
pub const MAX_COMMUNITY_CARDS: usize = 5;
/// Fewer cards than this are not yet evaluable and score 0.
pub const MIN_EVALUABLE: usize = 5;
/// Scores are `category * CATEGORY_WEIGHT + tiebreak rank`.
pub const CATEGORY_WEIGHT: u32 = 1_000_000;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn from_index(i: u32) -> Option<Category> {
        let c = match i {
            0 => Category::HighCard,
            1 => Category::OnePair,
            2 => Category::TwoPair,
            3 => Category::ThreeOfAKind,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::FourOfAKind,
            8 => Category::StraightFlush,
            _ => return None,
        };
        Some(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }

    fn score(self, tiebreak: u8) -> u32 {
        self as u32 * CATEGORY_WEIGHT + u32::from(tiebreak)
    }
}

/// Splits a score back into its category and tiebreak rank.
/// Returns `None` for the unevaluable score 0 and for out-of-range values.
pub fn score_category(score: u32) -> Option<(Category, u8)> {
    if score == 0 {
        return None;
    }
    let category = Category::from_index(score / CATEGORY_WEIGHT)?;
    let tiebreak = u8::try_from(score % CATEGORY_WEIGHT).ok()?;
    Some((category, tiebreak))
}

/// Scores the best poker hand found in `cards`; higher is strictly better and
/// equal scores are a tie.
///
/// The tiebreak is the single highest rank of the deciding group: the paired
/// rank for a pair, the top pair for two pair, the trips for a full house and
/// the top card of the run for a straight. Kickers never break ties. A flush
/// needs five cards of one suit among `cards`; a straight flush needs those
/// suited cards to form the run themselves.
///
/// A straight is five neighbours in the rank-sorted cards, duplicates kept,
/// whose first and fifth ranks are four apart. A paired rank inside the run
/// therefore breaks it, and the Ace only plays high.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::evaluate_cards;
///
/// let cards = parse_cards("As Ks Qs Js Ts 2h 3h").unwrap();
/// assert_eq!(evaluate_cards(&cards), 8_000_014);
/// ```
pub fn evaluate_cards(cards: &[Card]) -> u32 {
    if cards.len() < MIN_EVALUABLE {
        return 0;
    }

    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut rank_mask: u16 = 0;
    let mut suit_counts = [0u8; 4];
    let mut suit_masks = [0u16; 4];
    for c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        suit_counts[c.suit.index()] += 1;
        suit_masks[c.suit.index()] |= 1 << r;
    }

    let flush_mask = (0..4)
        .find(|&s| suit_counts[s] >= 5)
        .map(|s| suit_masks[s]);

    if let Some(high) = flush_mask.and_then(|mask| straight_high(&ranks_of_mask(mask))) {
        return Category::StraightFlush.score(high);
    }

    let mut quads = None;
    let mut trips = Vec::new();
    let mut pairs = Vec::new();
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            0 | 1 => {}
            2 => pairs.push(r),
            3 => trips.push(r),
            _ => quads = quads.or(Some(r)),
        }
    }

    if let Some(q) = quads {
        return Category::FourOfAKind.score(q);
    }
    if let Some(&t) = trips.first() {
        if trips.len() >= 2 || !pairs.is_empty() {
            return Category::FullHouse.score(t);
        }
    }
    if let Some(mask) = flush_mask {
        return Category::Flush.score(highest_rank(mask));
    }
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    if let Some(high) = straight_high(&ranks) {
        return Category::Straight.score(high);
    }
    if let Some(&t) = trips.first() {
        return Category::ThreeOfAKind.score(t);
    }
    match pairs.as_slice() {
        [high, _, ..] => Category::TwoPair.score(*high),
        [p] => Category::OnePair.score(*p),
        [] => Category::HighCard.score(highest_rank(rank_mask)),
    }
}

fn highest_rank(mask: u16) -> u8 {
    (15 - mask.leading_zeros()) as u8
}

/// Ranks set in `mask`, highest first.
fn ranks_of_mask(mask: u16) -> Vec<u8> {
    (2..=14u8).rev().filter(|&r| mask & (1 << r) != 0).collect()
}

/// Top rank of the first 5-window of `ranks` (sorted descending) that spans
/// exactly four ranks.
fn straight_high(ranks: &[u8]) -> Option<u8> {
    ranks
        .windows(5)
        .find(|w| w[0] - w[4] == 4)
        .map(|w| w[0])
}

/// One player's cards: up to two private hole cards plus up to five shared
/// community cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    hole: Vec<Card>,
    community: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hole_card(&mut self, card: Card) -> Result<(), EngineError> {
        if self.hole.len() >= MAX_HOLE_CARDS {
            return Err(EngineError::HoleCardsFull);
        }
        self.hole.push(card);
        Ok(())
    }

    pub fn add_community_card(&mut self, card: Card) -> Result<(), EngineError> {
        if self.community.len() >= MAX_COMMUNITY_CARDS {
            return Err(EngineError::BoardFull);
        }
        self.community.push(card);
        Ok(())
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn all_cards(&self) -> Vec<Card> {
        let mut v = Vec::with_capacity(self.hole.len() + self.community.len());
        v.extend_from_slice(&self.hole);
        v.extend_from_slice(&self.community);
        v
    }

    pub fn clear(&mut self) {
        self.hole.clear();
        self.community.clear();
    }

    /// Score of hole plus community cards, or 0 while fewer than five cards
    /// are known or the hole cards are incomplete.
    pub fn evaluate(&self) -> u32 {
        if self.hole.len() != MAX_HOLE_CARDS {
            return 0;
        }
        evaluate_cards(&self.all_cards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_high_scans_sorted_windows() {
        assert_eq!(straight_high(&[14, 13, 12, 11, 10, 3, 2]), Some(14));
        assert_eq!(straight_high(&[13, 9, 8, 7, 6, 5]), Some(9));
        assert_eq!(straight_high(&[9, 8, 7, 6, 6, 5, 2]), None);
        assert_eq!(straight_high(&[14, 5, 4, 3, 2]), None);
        assert_eq!(straight_high(&[6, 5, 4, 3]), None);
    }

    #[test]
    fn mask_ranks_come_out_highest_first() {
        assert_eq!(ranks_of_mask((1 << 2) | (1 << 9) | (1 << 14)), vec![14, 9, 2]);
    }

    #[test]
    fn highest_rank_reads_top_bit() {
        assert_eq!(highest_rank(1 << 14), 14);
        assert_eq!(highest_rank((1 << 2) | (1 << 9)), 9);
    }
}
