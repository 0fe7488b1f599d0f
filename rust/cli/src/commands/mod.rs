//! Command handlers, one module per subcommand.
//!
//! Every handler takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`; `run` maps the error to an exit code.

mod cfg;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{handle_play_command, PlayOptions};
pub use sim::{handle_sim_command, SimOptions};

use std::io::Write;
use std::path::Path;

use holdem_ai::create_ai_seeded;
use holdem_engine::decision::DecisionProvider;
use holdem_engine::game::Game;

use crate::error::CliError;
use crate::io_utils::append_history;

/// One seeded provider per automated seat; seat `i` gets `seed + i` so two
/// bots of the same kind do not mirror each other.
fn build_bots(
    ai: &str,
    seats: impl Iterator<Item = usize>,
    seed: u64,
) -> Result<Vec<Box<dyn DecisionProvider>>, CliError> {
    seats
        .map(|seat| create_ai_seeded(ai, Some(seed.wrapping_add(seat as u64))).map_err(CliError::from))
        .collect()
}

/// Drains the finished hand lines into the history file, if one is configured.
fn save_history(path: Option<&Path>, game: &mut Game, seed: u64) -> Result<(), CliError> {
    let Some(path) = path else {
        return Ok(());
    };
    let header = format!("{} seed={}", chrono::Utc::now().to_rfc3339(), seed);
    append_history(path, &header, &game.take_history())?;
    tracing::debug!(path = %path.display(), "history appended");
    Ok(())
}

fn write_final_stacks(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Final stacks:")?;
    for (seat, p) in game.players().iter().enumerate() {
        writeln!(out, "  P{} {}: {}", seat, p.name(), p.chips)?;
    }
    Ok(())
}
