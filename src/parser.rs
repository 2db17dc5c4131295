//! Line classification for the script language.
//!
//! A line is matched against a fixed, ordered list of literal prefixes; the
//! first prefix the line starts with wins. The argument is whatever follows
//! the prefix and exactly one delimiter character, so `Delay 50` and
//! `Delay:50` both carry `50`. Lines matching no prefix are key combos.
//!
//! `REPEAT` is not a command here: it is control flow owned by the engine, and
//! [`repeat_count`] only recognises and parses it.

use crate::command::{Command, ScriptCommand};
use crate::commands::{Comment, DefaultDelay, Delay, Import, KeyCombo, Print, SendString, ToggleLed};
use anyhow::{Context as _, Result, anyhow};

pub const REPEAT: &str = "REPEAT";

type ParseFn = fn(&str) -> Result<Command>;

static REGISTRY: &[(&str, ParseFn)] = &[
    (Comment::NAME, Comment::parse_command),
    (Delay::NAME, Delay::parse_command),
    (SendString::NAME, SendString::parse_command),
    (Print::NAME, Print::parse_command),
    (Import::NAME, Import::parse_command),
    (DefaultDelay::NAME, DefaultDelay::parse_command),
    (DefaultDelay::ALIAS, DefaultDelay::parse_command),
    (ToggleLed::NAME, ToggleLed::parse_command),
];

/// Classify a single line (already stripped of trailing whitespace).
///
/// # Errors
///
/// Returns an error if the matching command's argument is malformed, e.g. a
/// non-numeric `Delay`.
///
/// # Example
///
/// ```
/// use pico_ducky::parser::parse_line;
///
/// assert_eq!(parse_line("String Hi").unwrap().name(), "String");
/// assert_eq!(parse_line("GUI r").unwrap().name(), "keys");
/// ```
pub fn parse_line(line: &str) -> Result<Command> {
    match REGISTRY
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
    {
        Some((prefix, parse)) => {
            parse(argument(line, prefix)).with_context(|| format!("Malformed line: {line}"))
        }
        None => KeyCombo::parse_command(line),
    }
}

/// `None` if `line` is not a REPEAT line, otherwise its parsed count.
/// Negative counts repeat nothing.
pub fn repeat_count(line: &str) -> Option<Result<u64>> {
    line.starts_with(REPEAT).then(|| {
        let args = argument(line, REPEAT);
        args.trim()
            .parse::<i64>()
            .map(|count| count.max(0) as u64)
            .map_err(|_| anyhow!("{REPEAT}: expected an integer, got '{args}'"))
            .with_context(|| format!("Malformed line: {line}"))
    })
}

/// The text after `prefix` and one delimiter character.
fn argument<'a>(line: &'a str, prefix: &str) -> &'a str {
    let mut rest = line[prefix.len()..].chars();
    rest.next();
    rest.as_str()
}
