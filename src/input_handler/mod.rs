use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::state::Multiplier;

static MOVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([234])$").expect("move pattern should compile"));
static EXIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i)(q|quit|exit)$").expect("exit pattern should compile"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user requested exit")]
    UserExit,
}

/// Parses a single line of player input into a move.
pub fn parse_move(raw: &str) -> Result<Multiplier, InputError> {
    let raw = raw.trim();

    if EXIT_RE.is_match(raw) {
        return Err(InputError::UserExit);
    }

    match MOVE_RE.captures(raw).and_then(|caps| caps.get(1)) {
        Some(digit) => Multiplier::from_str(digit.as_str()).map_err(|_| InputError::InvalidInput {
            input: raw.to_string(),
        }),
        None => Err(InputError::InvalidInput {
            input: raw.to_string(),
        }),
    }
}

/// Reads one line from stdin and parses it into a move.
pub fn parse_move_input() -> Result<Multiplier, InputError> {
    let mut input = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    // end of input behaves like an explicit quit
    if bytes_read == 0 {
        return Err(InputError::UserExit);
    }

    parse_move(&input)
}
