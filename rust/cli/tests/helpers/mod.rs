//! Shared test helpers: an in-process CLI runner and an environment guard.
//!
//! Every test that runs a command reading the configuration must be
//! `#[serial]`, because `HOLDEM_*` variables are process-wide.

#![allow(dead_code)]

use std::io::Cursor;

pub const HOLDEM_VARS: &[&str] = &[
    "HOLDEM_CONFIG",
    "HOLDEM_SEED",
    "HOLDEM_STACK",
    "HOLDEM_BLINDS",
    "HOLDEM_OPPONENTS",
    "HOLDEM_AI",
    "HOLDEM_HISTORY",
];

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(args: &[&str]) -> CliResult {
    run_with_input(args, "")
}

pub fn run_with_input(args: &[&str], input: &str) -> CliResult {
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let exit_code = holdem_cli::run_with_input(argv, &mut out, &mut err, &mut stdin);
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).expect("utf8 stdout"),
        stderr: String::from_utf8(err).expect("utf8 stderr"),
    }
}

/// Clears every `HOLDEM_*` variable, applies `pairs`, and restores the
/// previous values on drop.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn clean() -> Self {
        Self::apply(&[])
    }

    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in HOLDEM_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            if !HOLDEM_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
