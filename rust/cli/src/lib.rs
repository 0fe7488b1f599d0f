//! # Holdem CLI Library
//!
//! Terminal front end for the `holdem-engine` crate: a human seat against
//! automated opponents, automated simulations, configuration display and a
//! hand scorer.
//!
//! The primary entry point is [`run`], which parses arguments and executes the
//! matching subcommand against injected output streams.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "eval", "Ah", "Kh", "Qh", "Jh", "Th"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Straight flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: play hands from seat 0, reading actions from stdin
//! - `sim`: run an automated session
//! - `cfg`: display the resolved configuration
//! - `eval`: score 5 to 7 cards

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_eval_command, handle_play_command, handle_sim_command,
    PlayOptions, SimOptions,
};
pub use error::CliError;

/// Parses `args` and runs the chosen subcommand.
///
/// Returns the process exit code: `0` on success, `2` for errors, `130` when
/// stdin closes in the middle of an interactive session.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit input stream for the `play` command.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn std::io::BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "cfg", "eval"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    match write!(out, "{}", e) {
                        Ok(()) => exit_code::SUCCESS,
                        Err(_) => exit_code::ERROR,
                    }
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    let _ = writeln!(err, "Commands: {}", COMMANDS.join(", "));
                    exit_code::ERROR
                }
            };
        }
    };

    tracing::debug!(command = cli.cmd.name(), "dispatching");
    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Play {
            hands,
            seed,
            opponents,
            ai,
            stack,
            history,
        } => handle_play_command(
            PlayOptions {
                hands,
                seed,
                opponents,
                ai,
                stack,
                history,
            },
            out,
            err,
            input,
        ),
        Commands::Sim {
            hands,
            seed,
            players,
            ai,
            history,
            json,
        } => handle_sim_command(
            SimOptions {
                hands,
                seed,
                players,
                ai,
                history,
                json,
            },
            out,
            err,
        ),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            e.exit_code()
        }
    }
}
