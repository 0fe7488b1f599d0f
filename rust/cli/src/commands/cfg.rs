//! `cfg`: prints the resolved configuration as JSON, each value paired with
//! where it came from (`default`, `file` or `env`).

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.blinds,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.blinds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "opponents": {
            "value": config.opponents,
            "source": sources.opponents,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        },
        "history_path": {
            "value": config.history_path,
            "source": sources.history_path,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
