//! Shared utilities for CLI commands.

use std::fmt::Display;
use std::process;
use std::time::Duration;

use number_duel::state::{GameState, Player};

/// Seconds with at most six decimals and no trailing zeros, e.g. `0.00012`.
pub(crate) fn format_seconds(duration: Duration) -> String {
    let formatted = format!("{:.6}", duration.as_secs_f64());
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn format_score(score: f64) -> String {
    if score == f64::INFINITY {
        "+inf".to_string()
    } else if score == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.4}", score)
    }
}

pub(crate) fn position_from_args(
    number: u32,
    human_score: i32,
    computer_score: i32,
    to_move: Player,
) -> GameState {
    GameState::with_scores(number, human_score, computer_score, to_move)
        .unwrap_or_else(|error| exit_with_error(error))
}

pub(crate) fn exit_with_error<E: Display, T>(error: E) -> T {
    eprintln!("error: {}", error);
    process::exit(1)
}
