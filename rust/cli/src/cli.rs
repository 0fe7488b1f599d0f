//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em table in the terminal",
    disable_help_subcommand = true
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands from seat 0 against automated opponents
    Play {
        #[arg(long, default_value_t = 1)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Number of automated seats (1-22)
        #[arg(long)]
        opponents: Option<usize>,
        /// Opponent strategy: baseline, station or random
        #[arg(long)]
        ai: Option<String>,
        /// Starting chips for every seat
        #[arg(long)]
        stack: Option<u32>,
        /// Append hand history to this file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Run an automated session and print a summary
    Sim {
        #[arg(long, default_value_t = 10)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats (2-23)
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long)]
        ai: Option<String>,
        #[arg(long)]
        history: Option<PathBuf>,
        /// Print the final table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Score 5 to 7 cards, e.g. `holdem eval Ah Kh Qh Jh Th`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Cfg => "cfg",
            Commands::Eval { .. } => "eval",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        HoldemCli::command().debug_assert();
    }

    #[test]
    fn play_flags_parse() {
        let cli = HoldemCli::try_parse_from([
            "holdem", "play", "--hands", "3", "--seed", "7", "--opponents", "2", "--ai", "random",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                hands,
                seed,
                opponents,
                ai,
                stack,
                history,
            } => {
                assert_eq!(hands, 3);
                assert_eq!(seed, Some(7));
                assert_eq!(opponents, Some(2));
                assert_eq!(ai.as_deref(), Some("random"));
                assert_eq!(stack, None);
                assert_eq!(history, None);
            }
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn eval_needs_cards() {
        assert!(HoldemCli::try_parse_from(["holdem", "eval"]).is_err());
        let cli = HoldemCli::try_parse_from(["holdem", "eval", "Ah", "Kh"]).unwrap();
        assert_eq!(cli.cmd.name(), "eval");
    }
}
