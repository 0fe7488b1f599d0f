use holdem_engine::action::{Action, ActionKind, Amount, ParseActionError};
use holdem_engine::betting::{BettingRound, Stage};
use holdem_engine::errors::ActionError;
use holdem_engine::player::Player;
use holdem_engine::rules::{available_actions, fallback_action, validate_action, ValidatedAction};

fn round(stage: Stage, current_bet: u32, min_bet: u32) -> BettingRound {
    let mut r = BettingRound::new(10);
    r.stage = stage;
    r.current_bet = current_bet;
    r.min_bet = min_bet;
    r
}

#[test]
fn checks_run_in_order_turn_then_folded_then_spoke() {
    let r = round(Stage::Flop, 0, 10);
    let mut p = Player::new("p", 100);
    p.folded = true;
    p.spoke = true;
    // out of turn wins over everything else
    assert_eq!(
        validate_action(3, &p, &r, Action::Check),
        Err(ActionError::OutOfTurn { expected: 0, actual: 3 })
    );
    assert_eq!(validate_action(0, &p, &r, Action::Check), Err(ActionError::AlreadyFolded));
    p.folded = false;
    assert_eq!(
        validate_action(0, &p, &r, Action::Check),
        Err(ActionError::AlreadyActedThisStage)
    );
}

#[test]
fn spoken_player_may_answer_a_new_bet() {
    let r = round(Stage::Flop, 40, 70);
    let mut p = Player::new("p", 100);
    p.spoke = true;
    p.current_bet = 0;
    assert_eq!(validate_action(0, &p, &r, Action::Call), Ok(ValidatedAction::Call(40)));
}

#[test]
fn call_for_more_than_the_stack_goes_all_in() {
    let r = round(Stage::Turn, 50, 100);
    let mut p = Player::new("short", 20);
    let applied = validate_action(0, &p, &r, Action::Call).expect("call accepted");
    assert_eq!(applied, ValidatedAction::Call(20));

    let moved = p.commit(applied.chips_in(&p));
    assert_eq!(moved, 20);
    assert_eq!(p.chips, 0);
    assert!(p.is_all_in);
    assert!(!p.can_act());
}

#[test]
fn bet_rules() {
    let open = round(Stage::Flop, 30, 60);
    let p = Player::new("p", 100);
    assert_eq!(
        validate_action(0, &p, &open, Action::Bet(Amount::Chips(60))),
        Err(ActionError::BetNotAllowedWithOpenBet)
    );

    let clean = round(Stage::Flop, 0, 10);
    assert_eq!(
        validate_action(0, &p, &clean, Action::Bet(Amount::Chips(5))),
        Err(ActionError::BelowMinimumBet { amount: 5, minimum: 10 })
    );
    assert_eq!(
        validate_action(0, &p, &clean, Action::Bet(Amount::Chips(150))),
        Err(ActionError::InsufficientChips { needed: 150, available: 100 })
    );
    assert_eq!(
        validate_action(0, &p, &clean, Action::Bet(Amount::AllIn)),
        Ok(ValidatedAction::Bet { to: 100 })
    );
}

#[test]
fn raise_is_to_a_total_not_by_an_amount() {
    let r = round(Stage::Preflop, 10, 20);
    let mut p = Player::new("p", 95);
    p.current_bet = 5;
    assert_eq!(
        validate_action(0, &p, &r, Action::Raise(Amount::Chips(20))),
        Ok(ValidatedAction::Raise { to: 20 })
    );
    assert_eq!(ValidatedAction::Raise { to: 20 }.chips_in(&p), 15);
    // stack is chips plus what is already in front of the player
    assert_eq!(
        validate_action(0, &p, &r, Action::Raise(Amount::Chips(100))),
        Ok(ValidatedAction::Raise { to: 100 })
    );
    assert!(matches!(
        validate_action(0, &p, &r, Action::Raise(Amount::Chips(101))),
        Err(ActionError::InsufficientChips { .. })
    ));
}

#[test]
fn raise_and_call_need_an_open_bet_check_needs_none() {
    let clean = round(Stage::River, 0, 10);
    let p = Player::new("p", 100);
    assert_eq!(
        validate_action(0, &p, &clean, Action::Raise(Amount::Chips(20))),
        Err(ActionError::InvalidActionType { action: ActionKind::Raise, stage: Stage::River })
    );
    assert_eq!(
        validate_action(0, &p, &clean, Action::Call),
        Err(ActionError::InvalidActionType { action: ActionKind::Call, stage: Stage::River })
    );

    let open = round(Stage::River, 25, 50);
    assert_eq!(
        validate_action(0, &p, &open, Action::Check),
        Err(ActionError::CheckWithOutstandingBet { to_call: 25 })
    );
}

#[test]
fn showdown_accepts_only_reveal_or_hide() {
    let r = round(Stage::Showdown, 0, 10);
    let p = Player::new("p", 100);
    assert_eq!(validate_action(0, &p, &r, Action::Reveal), Ok(ValidatedAction::Reveal));
    assert_eq!(validate_action(0, &p, &r, Action::Hide), Ok(ValidatedAction::Hide));
    assert_eq!(
        validate_action(0, &p, &r, Action::Check),
        Err(ActionError::InvalidActionType { action: ActionKind::Check, stage: Stage::Showdown })
    );

    let preflop = round(Stage::Preflop, 10, 20);
    assert!(matches!(
        validate_action(0, &p, &preflop, Action::Reveal),
        Err(ActionError::InvalidActionType { action: ActionKind::Reveal, .. })
    ));
}

#[test]
fn rejection_is_repeatable() {
    let r = round(Stage::Flop, 40, 80);
    let p = Player::new("p", 100);
    let first = validate_action(0, &p, &r, Action::Check);
    let second = validate_action(0, &p, &r, Action::Check);
    assert!(first.is_err());
    assert_eq!(first, second);
}

#[test]
fn min_raise_tracks_the_last_increment() {
    let mut r = BettingRound::new(10);
    r.open_with_blind(5);
    r.open_with_blind(10);
    assert_eq!((r.current_bet, r.min_bet), (10, 20));
    r.raise_to(40);
    assert_eq!((r.current_bet, r.min_bet), (40, 70));
    // a short all-in does not shrink the next minimum raise
    r.raise_to(50);
    assert_eq!((r.current_bet, r.min_bet), (50, 80));
    r.next_stage();
    assert_eq!((r.stage, r.current_bet, r.min_bet), (Stage::Flop, 0, 10));
}

#[test]
fn stages_only_move_forward() {
    let mut stage = Stage::Preflop;
    let mut seen = vec![stage];
    while stage != Stage::Showdown {
        let next = stage.next();
        assert!(next > stage);
        stage = next;
        seen.push(stage);
    }
    assert_eq!(seen.len(), 5);
    assert_eq!(Stage::Showdown.next(), Stage::Showdown);
    let dealt: usize = seen.iter().map(|s| s.cards_dealt()).sum();
    assert_eq!(dealt, 5);
}

#[test]
fn completion_requires_everyone_spoken_and_matched() {
    let r = round(Stage::Flop, 20, 40);
    let mut a = Player::new("a", 100);
    let mut b = Player::new("b", 100);
    a.current_bet = 20;
    a.spoke = true;
    b.current_bet = 20;
    assert!(!r.is_complete(&[a.clone(), b.clone()]));
    b.spoke = true;
    assert!(r.is_complete(&[a.clone(), b.clone()]));

    let mut short = Player::new("short", 0);
    short.current_bet = 5;
    short.is_all_in = true;
    assert!(r.is_complete(&[a, b, short]));
}

#[test]
fn legal_action_sets() {
    assert_eq!(available_actions(Stage::Flop, 0, 0), vec![ActionKind::Bet, ActionKind::Check]);
    assert_eq!(available_actions(Stage::Preflop, 10, 10), vec![ActionKind::Raise, ActionKind::Check]);
    assert_eq!(
        available_actions(Stage::Turn, 30, 10),
        vec![ActionKind::Raise, ActionKind::Call, ActionKind::Fold]
    );
    assert_eq!(available_actions(Stage::Showdown, 0, 0), vec![ActionKind::Reveal, ActionKind::Hide]);

    assert_eq!(fallback_action(Stage::Flop, 0), Action::Check);
    assert_eq!(fallback_action(Stage::Flop, 10), Action::Fold);
    assert_eq!(fallback_action(Stage::Showdown, 0), Action::Hide);
}

#[test]
fn action_text_parsing() {
    assert_eq!(Action::parse("fold"), Ok(Action::Fold));
    assert_eq!(Action::parse("X"), Ok(Action::Check));
    assert_eq!(Action::parse("bet 40"), Ok(Action::Bet(Amount::Chips(40))));
    assert_eq!(Action::parse("r all"), Ok(Action::Raise(Amount::AllIn)));
    assert_eq!(Action::parse("shove"), Ok(Action::Raise(Amount::AllIn)));
    assert_eq!(Action::parse("muck"), Ok(Action::Hide));
    assert_eq!(Action::parse(""), Err(ParseActionError::Empty));
    assert!(matches!(Action::parse("raise"), Err(ParseActionError::MissingAmount(_))));
    assert!(matches!(Action::parse("bet 0"), Err(ParseActionError::InvalidAmount(_))));
    assert!(matches!(Action::parse("bet -5"), Err(ParseActionError::InvalidAmount(_))));
    assert!(matches!(Action::parse("check 5"), Err(ParseActionError::UnexpectedAmount(_))));
    assert!(matches!(Action::parse("juggle"), Err(ParseActionError::UnknownAction(_))));
    assert!(matches!(Action::parse("bet 5 now"), Err(ParseActionError::TrailingInput(_))));
}
