//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::Stylize;

/// Set from `-q`; silences warnings, confirmations and the clipboard prompt.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn skip_prompt() -> bool {
    should_skip(quiet(), unsafe { libc::isatty(0) == 1 })
}

/// Prompts are skipped in quiet mode and whenever stdin is not a terminal.
fn should_skip(quiet: bool, interactive: bool) -> bool {
    quiet || !interactive
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", msg.yellow());
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Entropy summary line - suppressed in quiet mode
pub fn entropy(bits: f64, strength: &str, source: &str, chars: usize) {
    if !quiet() {
        eprintln!(
            "{} {:.1} bits ({}) \u{2022} Source: {} \u{2022} Charset: {} chars",
            "Entropy:".bold(),
            bits,
            strength,
            source,
            chars
        );
    }
}

pub fn settings_saved(path: &str) {
    if !quiet() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &str) {
    if !quiet() {
        println!("{count} password(s) \u{2192} {path}");
    }
}
