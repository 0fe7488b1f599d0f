//! Layered CLI configuration: defaults, then a TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line flags
//! are applied last by the command handlers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use holdem_engine::game::{GameConfig, MAX_SEATS, MIN_SEATS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    /// Automated seats beside the human in `play`
    pub opponents: usize,
    pub ai: String,
    /// Append-only hand history file
    pub history_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: 1_000,
            small_blind: 5,
            big_blind: 10,
            seed: None,
            opponents: 1,
            ai: "baseline".into(),
            history_path: None,
        }
    }
}

impl Config {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub blinds: ValueSource,
    pub seed: ValueSource,
    pub opponents: ValueSource,
    pub ai: ValueSource,
    pub history_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            blinds: ValueSource::Default,
            seed: ValueSource::Default,
            opponents: ValueSource::Default,
            ai: ValueSource::Default,
            history_path: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env_value("HOLDEM_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.blinds = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.blinds = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.opponents {
            cfg.opponents = v;
            sources.opponents = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.history_path {
            cfg.history_path = Some(v);
            sources.history_path = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("HOLDEM_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("invalid HOLDEM_SEED {:?}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(stack) = env_value("HOLDEM_STACK") {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid HOLDEM_STACK {:?}", stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(blinds) = env_value("HOLDEM_BLINDS") {
        let (sb, bb) = parse_blinds(&blinds)?;
        cfg.small_blind = sb;
        cfg.big_blind = bb;
        sources.blinds = ValueSource::Env;
    }
    if let Some(n) = env_value("HOLDEM_OPPONENTS") {
        cfg.opponents = n
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("invalid HOLDEM_OPPONENTS {:?}", n)))?;
        sources.opponents = ValueSource::Env;
    }
    if let Some(ai) = env_value("HOLDEM_AI") {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Some(path) = env_value("HOLDEM_HISTORY") {
        cfg.history_path = Some(PathBuf::from(path));
        sources.history_path = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Parses `"SB/BB"`, e.g. `"5/10"`.
pub fn parse_blinds(s: &str) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::Invalid(format!("invalid blinds {:?}: expected SB/BB", s));
    let (sb, bb) = s.split_once('/').ok_or_else(invalid)?;
    let sb = sb.trim().parse().map_err(|_| invalid())?;
    let bb = bb.trim().parse().map_err(|_| invalid())?;
    Ok((sb, bb))
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.small_blind == 0 || cfg.big_blind < cfg.small_blind {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: blinds {}/{} must be positive with big >= small",
            cfg.small_blind, cfg.big_blind
        )));
    }
    validate_table(cfg.opponents + 1, cfg.starting_stack)
}

/// Seat count must be playable and every stack together must fit in a `u32` pot.
pub fn validate_table(seats: usize, starting_stack: u32) -> Result<(), ConfigError> {
    validate_seats(seats)?;
    let total = u64::from(starting_stack) * seats as u64;
    if total > u64::from(u32::MAX) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} seats of {} chips exceed the table limit of {} chips",
            seats,
            starting_stack,
            u32::MAX
        )));
    }
    Ok(())
}

fn validate_seats(seats: usize) -> Result<(), ConfigError> {
    if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} seats, expected {}..={}",
            seats, MIN_SEATS, MAX_SEATS
        )));
    }
    Ok(())
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    opponents: Option<usize>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    history_path: Option<PathBuf>,
}
