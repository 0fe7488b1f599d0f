//! Stdin reading and hand-history file helpers.

use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::Path;

/// Reads one line from `stdin`, trimmed.
///
/// Returns `None` on EOF or a read error, which the play loop treats as the
/// input closing.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Creates the parent directory of `path` (and any missing ancestors).
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Appends one session's history lines to `path`, preceded by a `%` header
/// line. Nothing is written when `lines` is empty.
pub fn append_history(path: &Path, header: &str, lines: &str) -> std::io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    ensure_parent_dir(path)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "% {}", header)?;
    file.write_all(lines.as_bytes())?;
    if !lines.ends_with('\n') {
        writeln!(file)?;
    }
    file.flush()
}
