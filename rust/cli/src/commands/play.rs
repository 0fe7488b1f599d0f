//! # Play Command
//!
//! Seat 0 is the human at the terminal and every other seat is an automated
//! provider. Before each human decision the table is rendered from seat 0's
//! viewpoint and one line is read from the input stream:
//! `fold`, `check`, `call`, `bet N`, `raise N`, `allin`, `reveal`, `hide`,
//! or `q` to quit.
//!
//! Illegal input is reported on the error stream and the prompt repeats.
//! Closing the input mid-hand ends the session with
//! [`CliError::Interrupted`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use holdem_engine::action::{Action, ActionKind};
use holdem_engine::decision::DecisionProvider;
use holdem_engine::errors::EngineError;
use holdem_engine::game::{Game, GameConfig};
use holdem_engine::player::Player;
use holdem_engine::state::{TurnView, Viewer};

use super::{build_bots, save_history, write_final_stacks};
use crate::config;
use crate::error::CliError;
use crate::formatters::{action_word, format_action, format_board, format_result, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;

const HUMAN_SEAT: usize = 0;

/// Flags given to `holdem play`; unset ones fall back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub hands: u32,
    pub seed: Option<u64>,
    pub opponents: Option<usize>,
    pub ai: Option<String>,
    pub stack: Option<u32>,
    pub history: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let mut cfg = config::load()?;
    if opts.seed.is_some() {
        cfg.seed = opts.seed;
    }
    if let Some(n) = opts.opponents {
        cfg.opponents = n;
    }
    if let Some(ai) = opts.ai {
        cfg.ai = ai;
    }
    if let Some(stack) = opts.stack {
        cfg.starting_stack = stack;
    }
    if opts.history.is_some() {
        cfg.history_path = opts.history;
    }
    config::validate(&cfg)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut bots = build_bots(&cfg.ai, 1..=cfg.opponents, seed)?;
    let mut players = vec![Player::new("hero", cfg.starting_stack)];
    players.extend(
        (1..=cfg.opponents).map(|seat| Player::new(format!("{}-{}", cfg.ai, seat), cfg.starting_stack)),
    );
    let game_config = GameConfig {
        seed: Some(seed),
        ..cfg.game_config()
    };
    let mut game = Game::new(game_config, players)?;

    writeln!(
        out,
        "play: hands={} seed={} opponents={} ai={}",
        opts.hands, seed, cfg.opponents, cfg.ai
    )?;
    writeln!(out, "Blinds: SB={} BB={}", cfg.small_blind, cfg.big_blind)?;

    let outcome = play_session(&mut game, &mut bots, opts.hands, out, err, input);
    save_history(cfg.history_path.as_deref(), &mut game, seed)?;
    outcome
}

fn play_session(
    game: &mut Game,
    bots: &mut [Box<dyn DecisionProvider>],
    hands: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    let names: Vec<String> = game.players().iter().map(|p| p.name().to_string()).collect();
    let mut played = 0u32;

    for _ in 0..hands {
        if game.is_game_over() {
            writeln!(out, "Game over: fewer than two players have chips")?;
            break;
        }
        if game.player(HUMAN_SEAT).is_some_and(|p| p.chips == 0) {
            writeln!(out, "You are out of chips")?;
            break;
        }

        game.start_new_hand()?;
        writeln!(out, "\n=== Hand {} ===", game.hand_number())?;
        let mut board_len = 0;
        while let Some(view) = game.turn_view() {
            if view.seat == HUMAN_SEAT {
                if human_turn(game, &view, out, err, input)? == Step::Quit {
                    writeln!(out, "Quit after {} hands", played)?;
                    return Ok(());
                }
            } else {
                let bot = bots[view.seat - 1].as_mut();
                bot_turn(game, bot, view.seat, &names, out)?;
            }
            if game.board().len() != board_len {
                board_len = game.board().len();
                writeln!(out, "Board: {}", format_board(game.board()))?;
            }
        }
        if let Some(result) = game.last_result() {
            write!(out, "{}", format_result(result, &names))?;
        }
        played += 1;
    }

    writeln!(out, "Hands played: {}", played)?;
    write_final_stacks(game, out)
}

fn human_turn(
    game: &mut Game,
    view: &TurnView,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<Step, CliError> {
    write!(out, "{}", format_table(&game.snapshot(Viewer::Seat(HUMAN_SEAT))))?;
    if view.to_call() > 0 {
        writeln!(out, "To call: {}  Raise to at least: {}", view.to_call(), view.min_bet)?;
    } else if view.can(ActionKind::Bet) {
        writeln!(out, "Bet at least: {}", view.min_bet)?;
    }
    let words: Vec<&str> = view.available.iter().map(|&kind| action_word(kind)).collect();

    loop {
        write!(out, "{}", ui::action_prompt(&words))?;
        out.flush()?;
        let Some(line) = read_stdin_line(input) else {
            return Err(CliError::Interrupted("input closed during a hand".to_string()));
        };
        if line.is_empty() {
            continue;
        }
        if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit") {
            return Ok(Step::Quit);
        }
        let action = match Action::parse(&line) {
            Ok(action) => action,
            Err(e) => {
                ui::write_error(err, &e.to_string())?;
                continue;
            }
        };
        match game.apply_action(HUMAN_SEAT, action) {
            Ok(outcome) => {
                writeln!(out, "hero {}", format_action(&outcome.applied))?;
                return Ok(Step::Continue);
            }
            Err(EngineError::Rejected(e)) => ui::write_error(err, &e.to_string())?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Asks an automated seat for its move through [`Game::apply_with_retries`].
fn bot_turn(
    game: &mut Game,
    bot: &mut dyn DecisionProvider,
    seat: usize,
    names: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = game.apply_with_retries(bot)?;
    let all_in = if outcome.all_in { " (all-in)" } else { "" };
    writeln!(out, "{} {}{}", names[seat], format_action(&outcome.applied), all_in)?;
    Ok(())
}
