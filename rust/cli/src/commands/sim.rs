//! `sim`: an automated-only session driven by [`Game::play_hand`].
//!
//! Prints one summary line per hand and the final stacks. With `--json` the
//! final table is printed as an omniscient snapshot instead of the stacks.

use std::io::Write;
use std::path::PathBuf;

use holdem_engine::game::{Game, GameConfig};
use holdem_engine::player::Player;
use holdem_engine::state::Viewer;

use super::{build_bots, save_history, write_final_stacks};
use crate::config;
use crate::error::CliError;
use crate::formatters::format_board;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub hands: u32,
    pub seed: Option<u64>,
    pub players: usize,
    pub ai: Option<String>,
    pub history: Option<PathBuf>,
    pub json: bool,
}

pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let mut cfg = config::load()?;
    if opts.seed.is_some() {
        cfg.seed = opts.seed;
    }
    if let Some(ai) = opts.ai {
        cfg.ai = ai;
    }
    if opts.history.is_some() {
        cfg.history_path = opts.history;
    }
    config::validate(&cfg)?;
    config::validate_table(opts.players, cfg.starting_stack)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut providers = build_bots(&cfg.ai, 0..opts.players, seed)?;
    let players = (0..opts.players)
        .map(|seat| Player::new(format!("{}-{}", cfg.ai, seat), cfg.starting_stack))
        .collect();
    let game_config = GameConfig {
        seed: Some(seed),
        ..cfg.game_config()
    };
    let mut game = Game::new(game_config, players)?;
    let starting_total = game.total_chips();

    if !opts.json {
        writeln!(
            out,
            "sim: hands={} players={} ai={} seed={}",
            opts.hands, opts.players, cfg.ai, seed
        )?;
    }

    let mut played = 0u32;
    let mut failure = None;
    for _ in 0..opts.hands {
        if game.is_game_over() {
            break;
        }
        let result = match game.play_hand(&mut providers) {
            Ok(result) => result,
            Err(e) => {
                failure = Some(e);
                break;
            }
        };
        played += 1;
        debug_assert_eq!(game.total_chips(), starting_total);
        if !opts.json {
            let winners: Vec<String> = result
                .payouts
                .iter()
                .map(|&(seat, amount)| format!("P{}+{}", seat, amount))
                .collect();
            writeln!(
                out,
                "Hand {}: pot {} board {} winners {}{}",
                result.hand_number,
                result.pot,
                format_board(&result.board),
                winners.join(" "),
                if result.uncontested { " (uncontested)" } else { "" }
            )?;
        }
    }

    save_history(cfg.history_path.as_deref(), &mut game, seed)?;
    if let Some(e) = failure {
        return Err(e.into());
    }

    if opts.json {
        let state = game.snapshot(Viewer::Omniscient);
        let json = state.to_json().map_err(std::io::Error::other)?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(out, "Hands played: {}", played)?;
        if game.is_game_over() {
            writeln!(out, "Game over")?;
        }
        write_final_stacks(&game, out)?;
    }
    Ok(())
}
