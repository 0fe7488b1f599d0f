use holdem_engine::action::{Action, ActionKind};
use holdem_engine::betting::Stage;
use holdem_engine::game::{Game, GameConfig};
use holdem_engine::history::{encode_action, pot_in_big_blinds, Blind, History};
use holdem_engine::player::Player;
use holdem_engine::pot::split_pot;
use holdem_engine::rules::ValidatedAction;
use holdem_engine::state::Viewer;

fn heads_up() -> Game {
    let config = GameConfig {
        small_blind: 1,
        big_blind: 2,
        seed: Some(99),
        ..GameConfig::default()
    };
    Game::new(config, vec![Player::new("alice", 100), Player::new("bob", 100)]).expect("table")
}

#[test]
fn seat_viewer_sees_only_their_own_cards() {
    let mut g = heads_up();
    g.start_new_hand().expect("deal");

    let state = g.snapshot(Viewer::Seat(0));
    assert_eq!(state.players[0].hole_cards.as_ref().map(Vec::len), Some(2));
    assert_eq!(state.players[1].hole_cards, None);
    assert_eq!(state.players[0].name, "alice");
    assert_eq!(state.players[0].position, "BTN");
    assert_eq!(state.players[1].position, "BB");
    assert_eq!(state.stage_name(), "Pre-flop");
    assert_eq!(state.current_player, Some(0));
    assert_eq!(state.pot, 3);

    let all = g.snapshot(Viewer::Omniscient);
    assert!(all.players.iter().all(|p| p.hole_cards.is_some()));
}

#[test]
fn snapshot_serializes_to_json() {
    let mut g = heads_up();
    g.start_new_hand().expect("deal");
    let json = g.snapshot(Viewer::Seat(1)).to_json().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse back");
    assert_eq!(value["pot"], 3);
    assert_eq!(value["stage"], "Preflop");
    assert!(value["players"][0]["hole_cards"].is_null());
    assert_eq!(value["players"][1]["hole_cards"].as_array().map(Vec::len), Some(2));
}

#[test]
fn turn_view_offers_the_legal_actions() {
    let mut g = heads_up();
    g.start_new_hand().expect("deal");
    let view = g.turn_view().expect("sb to act");
    assert_eq!(view.seat, 0);
    assert_eq!(view.stage, Stage::Preflop);
    assert_eq!(view.to_call(), 1);
    assert_eq!(view.hole_cards.len(), 2);
    assert!(view.community_cards.is_empty());
    assert_eq!(view.opponents, 1);
    assert_eq!(view.available, vec![ActionKind::Raise, ActionKind::Call, ActionKind::Fold]);

    g.apply_action(0, Action::Fold).expect("fold");
    assert!(g.turn_view().is_none());
}

#[test]
fn history_accumulates_one_line_per_hand() {
    let mut g = heads_up();
    for _ in 0..3 {
        g.start_new_hand().expect("deal");
        let seat = g.current_player().expect("to act");
        g.apply_action(seat, Action::Fold).expect("fold");
    }
    let lines: Vec<&str> = g.history().lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("#1 P0_100 P1_100 D0 "));
    assert!(lines[1].starts_with("#2 P0_99 P1_101 D1 P1_sb1 P0_bb2 "));
    assert!(lines[2].starts_with("#3 "));

    let taken = g.take_history();
    assert_eq!(taken.lines().count(), 3);
    assert!(g.history().is_empty());
}

#[test]
fn take_keeps_the_hand_in_progress() {
    let mut h = History::new();
    h.begin_hand(1, &[100, 100], 0);
    h.blind(0, Blind::Small, 1);
    h.blind(1, Blind::Big, 2);
    h.action(0, &ValidatedAction::Fold);
    h.winners(&[(1, 3)]);
    h.end_hand();
    h.begin_hand(2, &[99, 101], 1);

    assert_eq!(h.take(), "#1 P0_100 P1_100 D0 P0_sb1 P1_bb2 P0_f |W_P1+3\n");
    assert_eq!(h.as_str(), "#2 P0_99 P1_101 D1");
}

#[test]
fn action_tokens() {
    assert_eq!(encode_action(2, &ValidatedAction::Raise { to: 60 }), "P2_r60");
    assert_eq!(encode_action(0, &ValidatedAction::Bet { to: 20 }), "P0_b20");
    assert_eq!(encode_action(1, &ValidatedAction::Call(15)), "P1_c15");
    assert_eq!(encode_action(1, &ValidatedAction::Check), "P1_x");
    assert_eq!(encode_action(3, &ValidatedAction::Reveal), "P3_s");
    assert_eq!(encode_action(3, &ValidatedAction::Hide), "P3_m");
    assert_eq!(pot_in_big_blinds(25, 10), "2.5");
    assert_eq!(pot_in_big_blinds(40, 10), "4");
}

#[test]
fn tied_pots_split_with_the_odd_chip_to_the_first_seat() {
    assert_eq!(split_pot(30, &[0, 2]), vec![(0, 15), (2, 15)]);
    assert_eq!(split_pot(31, &[2, 0]), vec![(0, 16), (2, 15)]);
    assert_eq!(split_pot(10, &[1, 1]), vec![(1, 10)]);
    assert!(split_pot(7, &[]).is_empty());
}
