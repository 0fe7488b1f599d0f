use serde::{Deserialize, Serialize};

use crate::action::ActionKind;
use crate::betting::Stage;
use crate::cards::Card;

/// Whose eyes a snapshot is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viewer {
    Seat(usize),
    Omniscient,
}

impl Viewer {
    pub fn sees(&self, seat: usize) -> bool {
        match *self {
            Viewer::Seat(s) => s == seat,
            Viewer::Omniscient => true,
        }
    }
}

/// One seat as a renderer may see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: usize,
    pub name: String,
    pub position: String,
    pub chips: u32,
    pub current_bet: u32,
    pub folded: bool,
    pub all_in: bool,
    pub spoke: bool,
    pub revealed: bool,
    /// `None` when the viewer may not see this seat's cards
    pub hole_cards: Option<Vec<Card>>,
}

/// Read-only snapshot of the table for display collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<SeatView>,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub min_bet: u32,
    pub stage: Stage,
    pub dealer: usize,
    pub small_blind: usize,
    pub big_blind: usize,
    /// Seat to act, if a hand is waiting on someone
    pub current_player: Option<usize>,
    pub hand_number: u32,
    pub game_over: bool,
    pub viewer: Viewer,
}

impl GameState {
    pub fn stage_name(&self) -> &'static str {
        self.stage.name()
    }

    pub fn position_name(&self, seat: usize) -> Option<&str> {
        self.players.get(seat).map(|p| p.position.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Everything a decision provider is shown when it is asked to act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub seat: usize,
    pub stage: Stage,
    pub pot: u32,
    pub current_bet: u32,
    pub min_bet: u32,
    pub big_blind: u32,
    pub player_current_bet: u32,
    pub chips: u32,
    pub hole_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    /// Active opponents still in the hand
    pub opponents: usize,
    pub available: Vec<ActionKind>,
}

impl TurnView {
    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.player_current_bet)
    }

    pub fn can(&self, kind: ActionKind) -> bool {
        self.available.contains(&kind)
    }
}
